//! Rendering articles to HTML blocks and packing blocks into size-bounded payloads.

use omnivore_client::Article;
use teloxide::utils::html;

/// Size of a payload as Telegram counts it: UTF-16 code units, so astral-plane characters
/// (most emoji) count twice.
pub fn payload_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// `<b>title</b>:` line, then every highlight quote followed by a blank line, then one more blank
/// line. Title and quotes are HTML-escaped.
pub fn render_article(article: &Article) -> String {
    let mut block = format!("{}:\n", html::bold(&html::escape(&article.title)));
    for highlight in &article.highlights {
        block.push_str(&html::escape(&highlight.quote));
        block.push_str("\n\n");
    }
    block.push('\n');
    block
}

/// Packs rendered blocks in order into payloads of at most `max_len` UTF-16 units.
///
/// A block that would overflow a non-empty buffer flushes the buffer first. A block longer than
/// `max_len` on its own is emitted alone, untruncated. Empty blocks are skipped.
pub fn pack_payloads<I>(blocks: I, max_len: usize) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut payloads = Vec::new();
    let mut buffer = String::new();
    let mut buffer_len = 0usize;

    for block in blocks {
        let block_len = payload_len(&block);
        if block_len == 0 {
            continue;
        }
        if buffer_len > 0 && buffer_len + block_len > max_len {
            payloads.push(std::mem::take(&mut buffer));
            buffer_len = 0;
        }
        buffer.push_str(&block);
        buffer_len += block_len;
        if buffer_len >= max_len {
            payloads.push(std::mem::take(&mut buffer));
            buffer_len = 0;
        }
    }

    if buffer_len > 0 {
        payloads.push(buffer);
    }
    payloads
}

//! User-facing reply texts.

use omnivore_client::mask_token;
use storage::SampleSize;
use teloxide::utils::html;

pub const LABEL_PROMPT: &str = "Please enter the label name you want to filter by:";
pub const SAMPLE_SIZE_PROMPT: &str =
    "Please enter the number of random highlights you would like to receive [1, 10]:";
pub const INVALID_TOKEN: &str = "Invalid Omnivore API token. Please try again with a valid token running /start command one more time.";
pub const INVALID_NUMBER: &str = "Invalid number. Please try starting again with /start command.";
pub const EMPTY_LABEL: &str = "The label cannot be empty. Please enter the label name you want to filter by:";
pub const FAREWELL: &str = "Bye! I hope we can talk again some day.";
pub const FETCH_FAILED: &str = "Sorry, we could not fetch your highlights right now. Please try again later with /highlights command.";
pub const VALIDATION_UNAVAILABLE: &str = "Sorry, we could not reach Omnivore to check your token. Please try again later with /start command.";
pub const TOKEN_REVOKED: &str = "Your Omnivore API token is no longer valid.\n\nPlease run /delete and then register again with /start command.";

pub fn greeting(name: &str) -> String {
    format!("Hello {}! Please enter your Omnivore API token:", name)
}

pub fn already_registered(name: &str) -> String {
    format!(
        "Hi: {}!\nYou have already registered.\n\nIf you want to delete your data, please run /delete command.",
        name
    )
}

pub fn not_registered(name: &str) -> String {
    format!(
        "Hi: {}!\nYou have not registered yet.\n\nIf you want to start, please run /start command.",
        name
    )
}

pub fn deleted(name: &str) -> String {
    format!(
        "Hi: {}!\nWe have deleted your data from our database.\n\nIf you want to start again, please run /start command.",
        name
    )
}

pub fn help(name: &str) -> String {
    format!(
        "Hi: {}!\nYou can use the following commands:\n\n\
         /start - Start the registration process\n\
         /cancel - Cancel the registration in progress\n\
         /delete - Delete your data from our database\n\
         /highlights - Send your highlights\n\
         /help - Show this help",
        name
    )
}

/// Registration summary. The token is masked.
pub fn summary(name: &str, label: &str, credential: &str, amount: SampleSize) -> String {
    format!(
        "Here is your summary:\nFirst Name: {}\nLabel: {}\nOmnivore Token: {}\nAmount: {}\n\n\
         Wait a moment while we retrieve your highlights...\n",
        name,
        label,
        mask_token(credential),
        amount
    )
}

/// HTML reply for a label without qualifying articles.
pub fn no_highlights(label: &str) -> String {
    format!(
        "Currently there are no highlights found for the label: {}.\n\
         Whenever there are highlights, we will send them to you.\n\n",
        html::bold(&html::escape(label))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_masks_token() {
        let text = summary(
            "Ada",
            "reading",
            "abcdefgh-1234-5678-wxyz",
            SampleSize::new(3).unwrap(),
        );
        assert!(text.contains("Omnivore Token: abcdefg***wxyz"));
        assert!(!text.contains("abcdefgh-1234-5678-wxyz"));
        assert!(text.contains("Amount: 3"));
    }

    #[test]
    fn test_no_highlights_escapes_label() {
        assert!(no_highlights("a<b").contains("<b>a&lt;b</b>"));
    }

    #[test]
    fn test_help_lists_commands() {
        let text = help("Ada");
        for cmd in ["/start", "/cancel", "/delete", "/highlights", "/help"] {
            assert!(text.contains(cmd), "{cmd} missing");
        }
    }
}

//! Unit tests for [`omnivore_client::mask_token`].
//!
//! Tokens are masked for logs and user-facing summaries: first 7 chars + `***` + last 4 chars;
//! tokens of 11 chars or fewer are fully masked.

use omnivore_client::mask_token;

/// **Test: Short or empty tokens are fully masked.**
#[test]
fn mask_token_short_returns_all_star() {
    assert_eq!(mask_token(""), "***");
    assert_eq!(mask_token("abc"), "***");
    assert_eq!(mask_token("12345678901"), "***");
}

/// **Test: Long tokens show head and tail only.**
#[test]
fn mask_token_long_shows_head_and_tail() {
    assert_eq!(mask_token("123456789012"), "1234567***9012");
    assert_eq!(
        mask_token("0f3a9c1e-7b2d-4e5f-9a8b-112233445566"),
        "0f3a9c1***5566"
    );
}

/// **Test: Multi-byte characters never split.**
#[test]
fn mask_token_multibyte_is_char_based() {
    assert_eq!(mask_token("ééééééééééééé"), "ééééééé***éééé");
}

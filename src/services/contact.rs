use thiserror::Error;

use crate::models::Profile;

pub const CONTACT_SUBJECT: &str = "SkillSwap: Let's connect!";

/// Errors that can occur when composing a contact link
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("This user doesn't have an email listed.")]
    MissingRecipientEmail,
}

/// Body text of the introduction email
pub fn contact_body(sender: &Profile, recipient: &Profile) -> String {
    format!(
        "Hi {},\n\nI'd like to connect with you for a skill swap.\n\nMy email: {}\n\nBest regards,\n{}",
        recipient.name,
        sender.contact_email().unwrap_or_default(),
        sender.name,
    )
}

/// Build a `mailto:` link from `sender` to `recipient`
///
/// The sender's address cannot be set as `From` in a mailto link, so it is
/// placed in the body instead.
pub fn mailto_link(sender: &Profile, recipient: &Profile) -> Result<String, ContactError> {
    let recipient_email = recipient
        .contact_email()
        .ok_or(ContactError::MissingRecipientEmail)?;

    Ok(format!(
        "mailto:{}?subject={}&body={}",
        recipient_email,
        urlencoding::encode(CONTACT_SUBJECT),
        urlencoding::encode(&contact_body(sender, recipient)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mailto_link() {
        let sender = Profile::new("Ana", "guitar", "piano", "Lisbon").with_email("ana@example.com");
        let recipient = Profile::new("Ben", "piano", "guitar", "Porto").with_email("ben@example.com");

        let link = mailto_link(&sender, &recipient).unwrap();

        assert!(link.starts_with("mailto:ben@example.com?subject=SkillSwap%3A%20Let"));
        assert!(link.contains("&body=Hi%20Ben%2C%0A%0A"));
        assert!(link.contains("ana%40example.com"));
        assert!(link.ends_with("Best%20regards%2C%0AAna"));
    }

    #[test]
    fn test_missing_recipient_email() {
        let sender = Profile::new("Ana", "guitar", "piano", "Lisbon").with_email("ana@example.com");
        let recipient = Profile::new("Ben", "piano", "guitar", "Porto").with_email("");

        assert_eq!(
            mailto_link(&sender, &recipient),
            Err(ContactError::MissingRecipientEmail)
        );
    }

    #[test]
    fn test_body_without_sender_email() {
        let sender = Profile::new("Ana", "guitar", "piano", "Lisbon");
        let recipient = Profile::new("Ben", "piano", "guitar", "Porto");

        let body = contact_body(&sender, &recipient);

        assert!(body.contains("My email: \n"));
        assert!(body.starts_with("Hi Ben,"));
    }
}

//! Demo contacts loaded into the in-memory store at startup.

use super::contact::Contact;

const DEMO_CONTACTS: &[(&str, &str, &str, &str)] = &[
    ("Shruti", "Kapoor", "@shrutikapoor08", "https://placekitten.com/200/200"),
    ("Glenn", "Reyes", "@glnnrys", "https://placekitten.com/201/201"),
    ("Ryan", "Florence", "@ryanflorence", "https://placekitten.com/202/202"),
    ("Oscar", "Newman", "@__oscarnewman", "https://placekitten.com/203/203"),
    ("Michael", "Jackson", "@mjackson", "https://placekitten.com/204/204"),
];

/// Build the demo contact set. Each call produces fresh ids.
#[must_use]
pub fn demo_contacts() -> Vec<Contact> {
    DEMO_CONTACTS
        .iter()
        .enumerate()
        .map(|(i, (first, last, twitter, avatar))| {
            let mut contact = Contact::empty();
            contact.first = Some((*first).to_owned());
            contact.last = Some((*last).to_owned());
            contact.twitter = Some((*twitter).to_owned());
            contact.avatar = Some((*avatar).to_owned());
            contact.created_at += i64::try_from(i).unwrap_or_default();
            contact
        })
        .collect()
}

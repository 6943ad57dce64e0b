//! Edit form for a single contact.

use leptos::prelude::*;

use crate::services::contact::Contact;

#[component]
pub fn EditContact(contact: Contact) -> impl IntoView {
    let action = format!("/contacts/{}/edit", contact.id);
    let cancel_href = format!("/contacts/{}", contact.id);
    let first = contact.first.unwrap_or_default();
    let last = contact.last.unwrap_or_default();
    let twitter = contact.twitter.unwrap_or_default();
    let avatar = contact.avatar.unwrap_or_default();
    let notes = contact.notes.unwrap_or_default();

    view! {
        <form id="contact-form" method="post" action=action>
            <p>
                <span>"Name"</span>
                <input aria-label="First name" name="first" placeholder="First" type="text" value=first/>
                <input aria-label="Last name" name="last" placeholder="Last" type="text" value=last/>
            </p>
            <label>
                <span>"Twitter"</span>
                <input name="twitter" placeholder="@jack" type="text" value=twitter/>
            </label>
            <label>
                <span>"Avatar URL"</span>
                <input
                    aria-label="Avatar URL"
                    name="avatar"
                    placeholder="https://example.com/avatar.jpg"
                    type="text"
                    value=avatar
                />
            </label>
            <label>
                <span>"Notes"</span>
                <textarea name="notes" rows="6">{notes}</textarea>
            </label>
            <p>
                <button type="submit">"Save"</button>
                <a href=cancel_href>"Cancel"</a>
            </p>
        </form>
    }
}

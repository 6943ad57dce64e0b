//! Contact detail view and its favorite toggle.
//!
//! DESIGN
//! ======
//! Every action is a form posting to a sibling route: Edit navigates to the
//! edit form, Delete posts to `destroy`, and the star posts `favorite` back
//! to the contact's own route. Optional sections (twitter, notes) are only
//! emitted when the field is present.

use leptos::prelude::*;

use super::layout::ContactName;
use crate::services::contact::Contact;

#[component]
pub fn ContactDetail(contact: Contact) -> impl IntoView {
    let self_href = format!("/contacts/{}", contact.id);
    let edit_href = format!("/contacts/{}/edit", contact.id);
    let destroy_href = format!("/contacts/{}/destroy", contact.id);
    let alt = contact.avatar_alt();
    let avatar = contact.avatar.clone();
    let favorite = contact.favorite;

    let twitter = contact
        .twitter_url()
        .zip(contact.twitter.clone())
        .map(|(href, handle)| {
            view! {
                <p>
                    <a href=href>{handle}</a>
                </p>
            }
        });
    let notes = contact.notes.clone().map(|notes| view! { <p>{notes}</p> });

    view! {
        <div id="contact">
            <div>
                <img alt=alt src=avatar/>
            </div>

            <div>
                <h1>
                    <ContactName contact=contact/>
                    <Favorite action=self_href favorite=favorite/>
                </h1>

                {twitter}
                {notes}

                <div>
                    <form method="get" action=edit_href>
                        <button type="submit">"Edit"</button>
                    </form>
                    <form method="post" action=destroy_href>
                        <button type="submit">"Delete"</button>
                    </form>
                </div>
            </div>
        </div>
    }
}

/// Star button that submits the opposite of the current favorite state.
#[component]
pub fn Favorite(action: String, favorite: bool) -> impl IntoView {
    let (label, next, glyph) = if favorite {
        ("Remove from favorites", "false", "★")
    } else {
        ("Add to favorites", "true", "☆")
    };

    view! {
        <form method="post" action=action>
            <button type="submit" aria-label=label name="favorite" value=next>
                {glyph}
            </button>
        </form>
    }
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;

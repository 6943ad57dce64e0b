//! Document shell with the contact sidebar.

use leptos::prelude::*;

use crate::services::contact::Contact;

/// Full page: sidebar (search, new button, contact list) plus the detail
/// outlet filled by `children`.
#[component]
pub fn Layout(contacts: Vec<Contact>, q: String, selected: Option<String>, children: Children) -> impl IntoView {
    let nav = if contacts.is_empty() {
        view! {
            <p>
                <i>"No contacts"</i>
            </p>
        }
        .into_any()
    } else {
        let items = contacts
            .into_iter()
            .map(|contact| {
                let href = format!("/contacts/{}", contact.id);
                let active = selected.as_deref() == Some(contact.id.as_str());
                let star = contact.favorite.then(|| view! { <span>"★"</span> });
                view! {
                    <li>
                        <a href=href class:active=active>
                            <ContactName contact=contact/>
                            " "
                            {star}
                        </a>
                    </li>
                }
            })
            .collect_view();
        view! { <ul>{items}</ul> }.into_any()
    };

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>"Contacts"</title>
                <link rel="stylesheet" href="/static/app.css"/>
            </head>
            <body>
                <div id="sidebar">
                    <h1>"Contacts"</h1>
                    <div>
                        <form id="search-form" method="get" action="/">
                            <input
                                id="q"
                                aria-label="Search contacts"
                                placeholder="Search"
                                type="search"
                                name="q"
                                value=q
                            />
                        </form>
                        <form method="post" action="/contacts">
                            <button type="submit">"New"</button>
                        </form>
                    </div>
                    <nav>{nav}</nav>
                </div>
                <div id="detail">{children()}</div>
            </body>
        </html>
    }
}

/// `"{first} {last}"`, or an italic placeholder when both are absent.
#[component]
pub fn ContactName(contact: Contact) -> impl IntoView {
    if contact.has_name() {
        view! { <span>{contact.display_name()}</span> }.into_any()
    } else {
        view! { <i>"No Name"</i> }.into_any()
    }
}

/// Landing content shown when no contact is selected.
#[component]
pub fn IndexPage() -> impl IntoView {
    view! {
        <p id="index-page">
            "Pick a contact from the list, or press New to add one."
        </p>
    }
}

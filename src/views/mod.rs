//! Server-rendered HTML pages.
//!
//! DESIGN
//! ======
//! Pages are Leptos components rendered to a string per request. Nothing is
//! hydrated: every interaction is a plain HTML form handled by a route, so
//! the pages work without any client-side bundle.

pub mod contact;
pub mod edit;
pub mod layout;

use axum::response::Html;
use leptos::prelude::*;

use crate::services::contact::Contact;
use contact::ContactDetail;
use edit::EditContact;
use layout::{IndexPage, Layout};

/// Render a view tree into an HTML response body.
pub fn render(view: impl IntoView) -> Html<String> {
    Html(view.to_html())
}

/// `GET /`: sidebar plus the landing text.
#[must_use]
pub fn index_page(contacts: Vec<Contact>, q: String) -> Html<String> {
    render(view! {
        <Layout contacts=contacts q=q selected=None>
            <IndexPage/>
        </Layout>
    })
}

/// `GET /contacts/:id`: sidebar plus the detail view.
#[must_use]
pub fn contact_page(contacts: Vec<Contact>, q: String, contact: Contact) -> Html<String> {
    let selected = Some(contact.id.clone());
    render(view! {
        <Layout contacts=contacts q=q selected=selected>
            <ContactDetail contact=contact/>
        </Layout>
    })
}

/// `GET /contacts/:id/edit`: sidebar plus the edit form.
#[must_use]
pub fn edit_page(contacts: Vec<Contact>, q: String, contact: Contact) -> Html<String> {
    let selected = Some(contact.id.clone());
    render(view! {
        <Layout contacts=contacts q=q selected=selected>
            <EditContact contact=contact/>
        </Layout>
    })
}

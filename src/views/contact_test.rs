use leptos::prelude::*;

use super::*;
use crate::state::test_helpers::dummy_contact;
use crate::views::layout::{IndexPage, Layout};

fn render_detail(contact: Contact) -> String {
    view! { <ContactDetail contact=contact/> }.to_html()
}

#[test]
fn detail_shows_all_present_fields() {
    let html = render_detail(dummy_contact());
    assert!(html.contains("Jane Doe"));
    assert!(html.contains("Jane Doe avatar"));
    assert!(html.contains("https://placekitten.com/200/200"));
    assert!(html.contains("https://twitter.com/@jdoe"));
    assert!(html.contains("Met at the conference"));
    assert!(!html.contains("No Name"));
}

#[test]
fn detail_links_actions_to_sibling_routes() {
    let html = render_detail(dummy_contact());
    assert!(html.contains("/contacts/jdoe/edit"));
    assert!(html.contains("/contacts/jdoe/destroy"));
    assert!(html.contains(">Edit<"));
    assert!(html.contains(">Delete<"));
}

#[test]
fn detail_without_names_shows_placeholder() {
    let mut contact = dummy_contact();
    contact.first = None;
    contact.last = None;
    let html = render_detail(contact);
    assert!(html.contains("<i>No Name</i>"));
}

#[test]
fn detail_omits_absent_twitter_and_notes() {
    let mut contact = dummy_contact();
    contact.twitter = None;
    contact.notes = None;
    let html = render_detail(contact);
    assert!(!html.contains("twitter.com"));
    assert!(!html.contains("Met at the conference"));
}

#[test]
fn detail_escapes_user_text() {
    let mut contact = dummy_contact();
    contact.notes = Some("<script>alert(1)</script>".into());
    let html = render_detail(contact);
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn favorite_button_offers_to_add_when_not_favorite() {
    let html = view! { <Favorite action={"/contacts/jdoe".to_owned()} favorite=false/> }.to_html();
    assert!(html.contains("Add to favorites"));
    assert!(html.contains(r#"name="favorite""#));
    assert!(html.contains(r#"value="true""#));
    assert!(html.contains('☆'));
}

#[test]
fn favorite_button_offers_to_remove_when_favorite() {
    let html = view! { <Favorite action={"/contacts/jdoe".to_owned()} favorite=true/> }.to_html();
    assert!(html.contains("Remove from favorites"));
    assert!(html.contains(r#"value="false""#));
    assert!(html.contains('★'));
}

#[test]
fn layout_lists_contacts_and_marks_selection() {
    let mut other = dummy_contact();
    other.id = "other".into();
    other.first = None;
    other.last = None;
    other.favorite = true;

    let html = view! {
        <Layout contacts={vec![dummy_contact(), other]} q={"ja".to_owned()} selected={Some("jdoe".to_owned())}>
            <IndexPage/>
        </Layout>
    }
    .to_html();

    assert!(html.contains(r#"href="/contacts/jdoe""#));
    assert!(html.contains(r#"href="/contacts/other""#));
    assert!(html.contains("active"));
    assert!(html.contains("No Name"));
    assert!(html.contains('★'));
    assert!(html.contains(r#"value="ja""#));
    assert!(html.contains("index-page"));
}

#[test]
fn layout_without_contacts_says_so() {
    let html = view! {
        <Layout contacts={Vec::new()} q={String::new()} selected={None}>
            <IndexPage/>
        </Layout>
    }
    .to_html();
    assert!(html.contains("No contacts"));
}

//! Section layouts and section renderers for every page

use super::{RenderedSection, SectionContext, SectionDescriptor};
use crate::content::key::Page;

pub(super) fn layout(page: Page) -> &'static [SectionDescriptor] {
    match page {
        Page::Home => HOME,
        Page::Services => SERVICES,
        Page::Team => TEAM,
        Page::Speakers => SPEAKERS,
        Page::Workshops => WORKSHOPS,
        Page::Contact => CONTACT,
        Page::Footer => FOOTER,
    }
}

const fn section(id: &'static str, render: fn(&SectionContext<'_>) -> RenderedSection) -> SectionDescriptor {
    SectionDescriptor { id, render }
}

// Home

static HOME: &[SectionDescriptor] = &[
    section("hero", home_hero),
    section("images", home_images),
    section("client-logos", home_client_logos),
    section("featured-speakers", home_featured_speakers),
    section("services-overview", home_services_overview),
    section("faq", home_faq),
    section("cta", home_cta),
];

fn home_hero(ctx: &SectionContext<'_>) -> RenderedSection {
    ctx.section("hero", &["title", "subtitle", "cta_primary", "cta_secondary"])
}

fn home_images(ctx: &SectionContext<'_>) -> RenderedSection {
    ctx.section("images", &["hero_image"])
}

fn home_client_logos(ctx: &SectionContext<'_>) -> RenderedSection {
    ctx.section("client-logos", &["title", "logos"])
}

fn home_featured_speakers(ctx: &SectionContext<'_>) -> RenderedSection {
    ctx.section("featured-speakers", &["title", "subtitle", "view_all_label"])
}

fn home_services_overview(ctx: &SectionContext<'_>) -> RenderedSection {
    ctx.section("services-overview", &["title", "subtitle", "offerings"])
}

fn home_faq(ctx: &SectionContext<'_>) -> RenderedSection {
    ctx.section("faq", &["title", "items"])
}

fn home_cta(ctx: &SectionContext<'_>) -> RenderedSection {
    ctx.section("cta", &["title", "subtitle", "button_label"])
}

// Services

static SERVICES: &[SectionDescriptor] = &[
    section("hero", page_hero),
    section("offerings", services_offerings),
    section("delivery", services_delivery),
    section("budget", services_budget),
    section("cta", short_cta),
];

fn services_offerings(ctx: &SectionContext<'_>) -> RenderedSection {
    ctx.section("offerings", &["title", "items"])
}

fn services_delivery(ctx: &SectionContext<'_>) -> RenderedSection {
    ctx.section("delivery", &["title", "options"])
}

fn services_budget(ctx: &SectionContext<'_>) -> RenderedSection {
    ctx.section("budget", &["title", "ranges"])
}

// Team

static TEAM: &[SectionDescriptor] = &[
    section("hero", page_hero),
    section("mission", team_mission),
    section("members", team_members),
];

fn team_mission(ctx: &SectionContext<'_>) -> RenderedSection {
    ctx.section("mission", &["title", "body"])
}

fn team_members(ctx: &SectionContext<'_>) -> RenderedSection {
    ctx.section("members", &["title", "list"])
}

// Speakers

static SPEAKERS: &[SectionDescriptor] = &[
    section("hero", page_hero),
    section("directory", speakers_directory),
    section("cta", short_cta),
];

fn speakers_directory(ctx: &SectionContext<'_>) -> RenderedSection {
    ctx.section("directory", &["search_placeholder", "filter_label", "empty_state"])
}

// Workshops

static WORKSHOPS: &[SectionDescriptor] = &[
    section("hero", page_hero),
    section("catalog", workshops_catalog),
    section("formats", workshops_formats),
    section("cta", short_cta),
];

fn workshops_catalog(ctx: &SectionContext<'_>) -> RenderedSection {
    ctx.section("catalog", &["title", "empty_state", "inquire_label"])
}

fn workshops_formats(ctx: &SectionContext<'_>) -> RenderedSection {
    ctx.section("formats", &["title", "options"])
}

// Contact

static CONTACT: &[SectionDescriptor] = &[
    section("hero", page_hero),
    section("form", contact_form),
    section("budget", contact_budget),
    section("delivery", contact_delivery),
];

fn contact_form(ctx: &SectionContext<'_>) -> RenderedSection {
    ctx.section(
        "form",
        &[
            "name_label",
            "email_label",
            "organization_label",
            "message_label",
            "submit_label",
            "success_message",
        ],
    )
}

fn contact_budget(ctx: &SectionContext<'_>) -> RenderedSection {
    ctx.section("budget", &["label", "ranges"])
}

fn contact_delivery(ctx: &SectionContext<'_>) -> RenderedSection {
    ctx.section("delivery", &["label", "options"])
}

// Footer

static FOOTER: &[SectionDescriptor] = &[
    section("brand", footer_brand),
    section("links", footer_links),
    section("contact", footer_contact),
    section("legal", footer_legal),
];

fn footer_brand(ctx: &SectionContext<'_>) -> RenderedSection {
    ctx.section("brand", &["name", "tagline", "logo"])
}

fn footer_links(ctx: &SectionContext<'_>) -> RenderedSection {
    ctx.section("links", &["title", "items"])
}

fn footer_contact(ctx: &SectionContext<'_>) -> RenderedSection {
    ctx.section("contact", &["email", "phone"])
}

fn footer_legal(ctx: &SectionContext<'_>) -> RenderedSection {
    ctx.section("legal", &["copyright"])
}

// Shared by interior pages

fn page_hero(ctx: &SectionContext<'_>) -> RenderedSection {
    ctx.section("hero", &["title", "subtitle"])
}

fn short_cta(ctx: &SectionContext<'_>) -> RenderedSection {
    ctx.section("cta", &["title", "button_label"])
}

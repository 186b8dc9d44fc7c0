//! Default content catalog
//!
//! Single source of truth for every field the site renders:
//! - Content key and field kind
//! - Hard-coded fallback copy (used when no override is stored)
//! - Short description for editors
//!
//! The catalog is built once on first use and never mutated. A fresh
//! deployment with an empty content store renders entirely from here.

use super::codec::{ListKind, ListValue};
use super::entities::{
    BudgetRange, DeliveryOption, FaqEntry, FooterLink, LogoItem, ServiceOffering, TeamMember,
};
use super::key::Page;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

/// Process-wide default catalog
pub static DEFAULTS: Lazy<DefaultCatalog> = Lazy::new(|| DefaultCatalog::new(catalog_entries()));

/// How a field renders and is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "list_kind", rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    /// Asset URL returned by the upload collaborator
    Image,
    List(ListKind),
}

/// Fallback value for one field
#[derive(Debug, Clone, Copy)]
pub enum DefaultValue {
    Text(&'static str),
    List(fn() -> ListValue),
}

/// Catalog entry for one content key
#[derive(Debug, Clone, Copy)]
pub struct FieldDefault {
    pub key: &'static str,
    pub kind: FieldKind,
    pub default: DefaultValue,
    pub description: &'static str,
}

impl FieldDefault {
    /// Default in storage form (list defaults JSON-encoded)
    pub fn encoded_default(&self) -> String {
        match self.default {
            DefaultValue::Text(s) => s.to_string(),
            DefaultValue::List(f) => f().encode(),
        }
    }

    pub fn page(&self) -> Option<Page> {
        self.key.split('.').next().and_then(|p| p.parse().ok())
    }

    pub fn section(&self) -> &'static str {
        self.key.split('.').nth(1).unwrap_or("")
    }
}

/// Indexed, immutable view over the catalog entries
pub struct DefaultCatalog {
    entries: &'static [FieldDefault],
    index: HashMap<&'static str, usize>,
    encoded: Vec<String>,
}

impl DefaultCatalog {
    pub fn new(entries: &'static [FieldDefault]) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.key, i))
            .collect();
        let encoded = entries.iter().map(FieldDefault::encoded_default).collect();

        Self {
            entries,
            index,
            encoded,
        }
    }

    pub fn get(&self, key: &str) -> Option<&FieldDefault> {
        self.index.get(key).map(|&i| &self.entries[i])
    }

    /// Default in storage form, pre-encoded at catalog build time
    pub fn encoded(&self, key: &str) -> Option<&str> {
        self.index.get(key).map(|&i| self.encoded[i].as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldDefault> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys_for_page(&self, page: Page) -> Vec<&'static str> {
        self.entries
            .iter()
            .filter(|e| page.owns_key(e.key))
            .map(|e| e.key)
            .collect()
    }

    pub fn keys_for_section(&self, page: Page, section: &str) -> Vec<&'static str> {
        self.entries
            .iter()
            .filter(|e| page.owns_key(e.key) && e.section() == section)
            .map(|e| e.key)
            .collect()
    }
}

fn default_client_logos() -> ListValue {
    ListValue::Logos(vec![
        LogoItem { name: "Northwind Health".into(), src: "/logos/northwind.svg".into() },
        LogoItem { name: "Contoso Bank".into(), src: "/logos/contoso.svg".into() },
        LogoItem { name: "Fabrikam Labs".into(), src: "/logos/fabrikam.svg".into() },
        LogoItem { name: "Tailspin Retail".into(), src: "/logos/tailspin.svg".into() },
        LogoItem { name: "Litware University".into(), src: "/logos/litware.svg".into() },
    ])
}

fn default_service_offerings() -> ListValue {
    ListValue::ServiceOfferings(vec![
        ServiceOffering {
            title: "Keynote Speakers".into(),
            description: "World-class AI experts for conferences, summits and company all-hands.".into(),
            features: vec![
                "Tailored to your audience".into(),
                "Pre-event briefing call".into(),
                "Q&A session included".into(),
            ],
        },
        ServiceOffering {
            title: "Executive Workshops".into(),
            description: "Hands-on sessions that help leadership teams turn AI strategy into action.".into(),
            features: vec![
                "Half-day and full-day formats".into(),
                "Industry-specific case studies".into(),
            ],
        },
        ServiceOffering {
            title: "Panel Moderation".into(),
            description: "Experienced moderators who keep AI panels sharp, balanced and on time.".into(),
            features: Vec::new(),
        },
    ])
}

fn default_home_faqs() -> ListValue {
    ListValue::Faqs(vec![
        FaqEntry {
            question: "How far in advance should we book a speaker?".into(),
            answer: "We recommend reaching out 8-12 weeks before your event, though we can often accommodate shorter timelines.".into(),
        },
        FaqEntry {
            question: "Do your speakers present virtually?".into(),
            answer: "Yes. Most of our speakers offer virtual and hybrid formats alongside in-person keynotes.".into(),
        },
        FaqEntry {
            question: "Can a talk be customized for our industry?".into(),
            answer: "Every engagement starts with a briefing call so the speaker can tailor examples to your audience.".into(),
        },
    ])
}

fn default_delivery_options() -> ListValue {
    ListValue::DeliveryOptions(vec![
        DeliveryOption {
            value: "in-person".into(),
            label: "In Person".into(),
            description: "The speaker travels to your venue.".into(),
        },
        DeliveryOption {
            value: "virtual".into(),
            label: "Virtual".into(),
            description: "Live-streamed session on your platform of choice.".into(),
        },
        DeliveryOption {
            value: "hybrid".into(),
            label: "Hybrid".into(),
            description: "On stage for the room, streamed for remote attendees.".into(),
        },
    ])
}

fn default_workshop_formats() -> ListValue {
    ListValue::DeliveryOptions(vec![
        DeliveryOption {
            value: "half-day".into(),
            label: "Half Day".into(),
            description: "A focused three to four hour session.".into(),
        },
        DeliveryOption {
            value: "full-day".into(),
            label: "Full Day".into(),
            description: "Deep-dive with hands-on exercises.".into(),
        },
        DeliveryOption {
            value: "series".into(),
            label: "Multi-Session Series".into(),
            description: "Weekly sessions spread across a quarter.".into(),
        },
    ])
}

fn default_budget_ranges() -> ListValue {
    ListValue::BudgetRanges(vec![
        BudgetRange { value: "under-10k".into(), label: "Under $10,000".into() },
        BudgetRange { value: "10k-25k".into(), label: "$10,000 - $25,000".into() },
        BudgetRange { value: "25k-50k".into(), label: "$25,000 - $50,000".into() },
        BudgetRange { value: "50k-plus".into(), label: "$50,000+".into() },
    ])
}

fn default_team_members() -> ListValue {
    ListValue::TeamMembers(vec![
        TeamMember {
            name: "Jordan Ellis".into(),
            title: "Founder & CEO".into(),
            bio: "Jordan has spent fifteen years connecting event organizers with leading technologists.".into(),
            image: "/team/jordan-ellis.jpg".into(),
            linkedin: None,
        },
        TeamMember {
            name: "Sam Okafor".into(),
            title: "Head of Speaker Relations".into(),
            bio: "Sam works directly with our speakers to match each talk to its audience.".into(),
            image: "/team/sam-okafor.jpg".into(),
            linkedin: None,
        },
        TeamMember {
            name: "Riley Chen".into(),
            title: "Client Success Lead".into(),
            bio: "Riley keeps every engagement on schedule from first call to final applause.".into(),
            image: "/team/riley-chen.jpg".into(),
            linkedin: None,
        },
    ])
}

fn default_footer_links() -> ListValue {
    ListValue::FooterLinks(vec![
        FooterLink { label: "Speakers".into(), href: "/speakers".into() },
        FooterLink { label: "Workshops".into(), href: "/workshops".into() },
        FooterLink { label: "Services".into(), href: "/services".into() },
        FooterLink { label: "Our Team".into(), href: "/team".into() },
        FooterLink { label: "Contact".into(), href: "/contact".into() },
        FooterLink { label: "Privacy Policy".into(), href: "/privacy".into() },
    ])
}

/// All catalog entries, grouped by page then section in render order
pub fn catalog_entries() -> &'static [FieldDefault] {
    use DefaultValue::{List, Text};
    use FieldKind::{Image, List as ListField, Text as TextField};

    const ENTRIES: &[FieldDefault] = &[
        // Home
        FieldDefault {
            key: "home.hero.title",
            kind: TextField,
            default: Text("Book the World's Leading AI Speakers"),
            description: "Hero headline",
        },
        FieldDefault {
            key: "home.hero.subtitle",
            kind: TextField,
            default: Text("Keynotes, workshops and panels from the people building the future of artificial intelligence."),
            description: "Hero supporting line",
        },
        FieldDefault {
            key: "home.hero.cta_primary",
            kind: TextField,
            default: Text("Find a Speaker"),
            description: "Primary hero button",
        },
        FieldDefault {
            key: "home.hero.cta_secondary",
            kind: TextField,
            default: Text("Plan a Workshop"),
            description: "Secondary hero button",
        },
        FieldDefault {
            key: "home.images.hero_image",
            kind: Image,
            default: Text("/images/hero-stage.jpg"),
            description: "Hero background image URL",
        },
        FieldDefault {
            key: "home.client-logos.title",
            kind: TextField,
            default: Text("Trusted by teams at"),
            description: "Label above the client logo strip",
        },
        FieldDefault {
            key: "home.client-logos.logos",
            kind: ListField(ListKind::Logos),
            default: List(default_client_logos),
            description: "Client logos",
        },
        FieldDefault {
            key: "home.featured-speakers.title",
            kind: TextField,
            default: Text("Featured Speakers"),
            description: "Featured speakers heading",
        },
        FieldDefault {
            key: "home.featured-speakers.subtitle",
            kind: TextField,
            default: Text("Researchers, founders and practitioners who make AI make sense."),
            description: "Featured speakers intro",
        },
        FieldDefault {
            key: "home.featured-speakers.view_all_label",
            kind: TextField,
            default: Text("View All Speakers"),
            description: "Link to the speaker directory",
        },
        FieldDefault {
            key: "home.services-overview.title",
            kind: TextField,
            default: Text("How We Help"),
            description: "Services overview heading",
        },
        FieldDefault {
            key: "home.services-overview.subtitle",
            kind: TextField,
            default: Text("From a single keynote to a year-long learning program."),
            description: "Services overview intro",
        },
        FieldDefault {
            key: "home.services-overview.offerings",
            kind: ListField(ListKind::ServiceOfferings),
            default: List(default_service_offerings),
            description: "Service cards",
        },
        FieldDefault {
            key: "home.faq.title",
            kind: TextField,
            default: Text("Frequently Asked Questions"),
            description: "FAQ heading",
        },
        FieldDefault {
            key: "home.faq.items",
            kind: ListField(ListKind::Faqs),
            default: List(default_home_faqs),
            description: "FAQ entries",
        },
        FieldDefault {
            key: "home.cta.title",
            kind: TextField,
            default: Text("Ready to Inspire Your Audience?"),
            description: "Closing call-to-action heading",
        },
        FieldDefault {
            key: "home.cta.subtitle",
            kind: TextField,
            default: Text("Tell us about your event and we'll send a shortlist within two business days."),
            description: "Closing call-to-action text",
        },
        FieldDefault {
            key: "home.cta.button_label",
            kind: TextField,
            default: Text("Get Started"),
            description: "Closing call-to-action button",
        },

        // Services
        FieldDefault {
            key: "services.hero.title",
            kind: TextField,
            default: Text("Our Services"),
            description: "Services page headline",
        },
        FieldDefault {
            key: "services.hero.subtitle",
            kind: TextField,
            default: Text("Expert AI voices for every format and every audience."),
            description: "Services page supporting line",
        },
        FieldDefault {
            key: "services.offerings.title",
            kind: TextField,
            default: Text("What We Offer"),
            description: "Offerings heading",
        },
        FieldDefault {
            key: "services.offerings.items",
            kind: ListField(ListKind::ServiceOfferings),
            default: List(default_service_offerings),
            description: "Offering cards",
        },
        FieldDefault {
            key: "services.delivery.title",
            kind: TextField,
            default: Text("Delivery Formats"),
            description: "Delivery formats heading",
        },
        FieldDefault {
            key: "services.delivery.options",
            kind: ListField(ListKind::DeliveryOptions),
            default: List(default_delivery_options),
            description: "Delivery format options",
        },
        FieldDefault {
            key: "services.budget.title",
            kind: TextField,
            default: Text("Typical Budgets"),
            description: "Budget brackets heading",
        },
        FieldDefault {
            key: "services.budget.ranges",
            kind: ListField(ListKind::BudgetRanges),
            default: List(default_budget_ranges),
            description: "Budget brackets",
        },
        FieldDefault {
            key: "services.cta.title",
            kind: TextField,
            default: Text("Not sure which format fits?"),
            description: "Services call-to-action heading",
        },
        FieldDefault {
            key: "services.cta.button_label",
            kind: TextField,
            default: Text("Talk to Our Team"),
            description: "Services call-to-action button",
        },

        // Team
        FieldDefault {
            key: "team.hero.title",
            kind: TextField,
            default: Text("Meet the Team"),
            description: "Team page headline",
        },
        FieldDefault {
            key: "team.hero.subtitle",
            kind: TextField,
            default: Text("The people who match great speakers with great events."),
            description: "Team page supporting line",
        },
        FieldDefault {
            key: "team.mission.title",
            kind: TextField,
            default: Text("Our Mission"),
            description: "Mission heading",
        },
        FieldDefault {
            key: "team.mission.body",
            kind: TextField,
            default: Text("We help organizations understand artificial intelligence by putting the clearest thinkers in the field in front of their people."),
            description: "Mission statement",
        },
        FieldDefault {
            key: "team.members.title",
            kind: TextField,
            default: Text("Leadership"),
            description: "Team grid heading",
        },
        FieldDefault {
            key: "team.members.list",
            kind: ListField(ListKind::TeamMembers),
            default: List(default_team_members),
            description: "Team member cards",
        },

        // Speakers
        FieldDefault {
            key: "speakers.hero.title",
            kind: TextField,
            default: Text("AI Speakers"),
            description: "Speaker directory headline",
        },
        FieldDefault {
            key: "speakers.hero.subtitle",
            kind: TextField,
            default: Text("Browse keynote speakers covering machine learning, ethics, strategy and more."),
            description: "Speaker directory supporting line",
        },
        FieldDefault {
            key: "speakers.directory.search_placeholder",
            kind: TextField,
            default: Text("Search by name, topic or industry"),
            description: "Directory search box placeholder",
        },
        FieldDefault {
            key: "speakers.directory.filter_label",
            kind: TextField,
            default: Text("Filter by topic"),
            description: "Directory topic filter label",
        },
        FieldDefault {
            key: "speakers.directory.empty_state",
            kind: TextField,
            default: Text("No speakers match your search. Try a broader topic."),
            description: "Shown when no speaker matches",
        },
        FieldDefault {
            key: "speakers.cta.title",
            kind: TextField,
            default: Text("Can't find the right fit?"),
            description: "Speakers call-to-action heading",
        },
        FieldDefault {
            key: "speakers.cta.button_label",
            kind: TextField,
            default: Text("Request a Recommendation"),
            description: "Speakers call-to-action button",
        },

        // Workshops
        FieldDefault {
            key: "workshops.hero.title",
            kind: TextField,
            default: Text("AI Workshops"),
            description: "Workshops page headline",
        },
        FieldDefault {
            key: "workshops.hero.subtitle",
            kind: TextField,
            default: Text("Practical, hands-on sessions that build real AI capability inside your team."),
            description: "Workshops page supporting line",
        },
        FieldDefault {
            key: "workshops.catalog.title",
            kind: TextField,
            default: Text("Workshop Catalog"),
            description: "Workshop list heading",
        },
        FieldDefault {
            key: "workshops.catalog.empty_state",
            kind: TextField,
            default: Text("New workshops are coming soon. Contact us to design a custom session."),
            description: "Shown when no workshop is published",
        },
        FieldDefault {
            key: "workshops.catalog.inquire_label",
            kind: TextField,
            default: Text("Inquire About This Workshop"),
            description: "Per-workshop inquiry button",
        },
        FieldDefault {
            key: "workshops.formats.title",
            kind: TextField,
            default: Text("Workshop Formats"),
            description: "Formats heading",
        },
        FieldDefault {
            key: "workshops.formats.options",
            kind: ListField(ListKind::DeliveryOptions),
            default: List(default_workshop_formats),
            description: "Workshop format options",
        },
        FieldDefault {
            key: "workshops.cta.title",
            kind: TextField,
            default: Text("Want a workshop built for your team?"),
            description: "Workshops call-to-action heading",
        },
        FieldDefault {
            key: "workshops.cta.button_label",
            kind: TextField,
            default: Text("Design a Custom Workshop"),
            description: "Workshops call-to-action button",
        },

        // Contact
        FieldDefault {
            key: "contact.hero.title",
            kind: TextField,
            default: Text("Contact Us"),
            description: "Contact page headline",
        },
        FieldDefault {
            key: "contact.hero.subtitle",
            kind: TextField,
            default: Text("Tell us about your event and we'll be in touch within one business day."),
            description: "Contact page supporting line",
        },
        FieldDefault {
            key: "contact.form.name_label",
            kind: TextField,
            default: Text("Your Name"),
            description: "Name field label",
        },
        FieldDefault {
            key: "contact.form.email_label",
            kind: TextField,
            default: Text("Email Address"),
            description: "Email field label",
        },
        FieldDefault {
            key: "contact.form.organization_label",
            kind: TextField,
            default: Text("Organization"),
            description: "Organization field label",
        },
        FieldDefault {
            key: "contact.form.message_label",
            kind: TextField,
            default: Text("Tell us about your event"),
            description: "Message field label",
        },
        FieldDefault {
            key: "contact.form.submit_label",
            kind: TextField,
            default: Text("Send Inquiry"),
            description: "Submit button",
        },
        FieldDefault {
            key: "contact.form.success_message",
            kind: TextField,
            default: Text("Thanks! Your inquiry has been received."),
            description: "Shown after a successful submission",
        },
        FieldDefault {
            key: "contact.budget.label",
            kind: TextField,
            default: Text("Estimated Budget"),
            description: "Budget selector label",
        },
        FieldDefault {
            key: "contact.budget.ranges",
            kind: ListField(ListKind::BudgetRanges),
            default: List(default_budget_ranges),
            description: "Budget selector options",
        },
        FieldDefault {
            key: "contact.delivery.label",
            kind: TextField,
            default: Text("Event Format"),
            description: "Delivery selector label",
        },
        FieldDefault {
            key: "contact.delivery.options",
            kind: ListField(ListKind::DeliveryOptions),
            default: List(default_delivery_options),
            description: "Delivery selector options",
        },

        // Footer
        FieldDefault {
            key: "footer.brand.name",
            kind: TextField,
            default: Text("AI Speaker Bureau"),
            description: "Brand name",
        },
        FieldDefault {
            key: "footer.brand.tagline",
            kind: TextField,
            default: Text("The voices shaping artificial intelligence, on your stage."),
            description: "Brand tagline",
        },
        FieldDefault {
            key: "footer.brand.logo",
            kind: Image,
            default: Text("/images/logo-light.svg"),
            description: "Footer logo URL",
        },
        FieldDefault {
            key: "footer.links.title",
            kind: TextField,
            default: Text("Explore"),
            description: "Footer link column heading",
        },
        FieldDefault {
            key: "footer.links.items",
            kind: ListField(ListKind::FooterLinks),
            default: List(default_footer_links),
            description: "Footer links",
        },
        FieldDefault {
            key: "footer.contact.email",
            kind: TextField,
            default: Text("hello@aispeakerbureau.com"),
            description: "Contact email",
        },
        FieldDefault {
            key: "footer.contact.phone",
            kind: TextField,
            default: Text("+1 (555) 010-2024"),
            description: "Contact phone",
        },
        FieldDefault {
            key: "footer.legal.copyright",
            kind: TextField,
            default: Text("© AI Speaker Bureau. All rights reserved."),
            description: "Copyright line",
        },
    ];

    ENTRIES
}

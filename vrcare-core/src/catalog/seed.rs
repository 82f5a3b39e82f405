//! Built-in seed catalog.

use super::{Catalog, Faq, Testimonial};
use crate::domain::{Provider, VisitMode};
use crate::signin::default_countries;

#[allow(clippy::too_many_arguments)]
fn provider(
    name: &str,
    title: &str,
    tags: &[&str],
    rating: f64,
    reviews: u32,
    next: &str,
    mode: VisitMode,
    price: &str,
) -> Provider {
    Provider {
        name: name.into(),
        title: title.into(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        rating,
        reviews,
        next: next.into(),
        mode,
        price: price.into(),
    }
}

impl Catalog {
    /// The directory's hardcoded seed data.
    pub fn seed() -> Self {
        let specialties = [
            "Anxiety",
            "Depression",
            "Stress",
            "ADHD",
            "Trauma",
            "Relationships",
            "Grief",
            "Sleep",
            "Self-esteem",
            "Burnout",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        let providers = vec![
            provider(
                "Dr. Maya Chen, PsyD",
                "Clinical Psychologist",
                &["Anxiety", "Trauma", "CBT"],
                4.9,
                312,
                "Tomorrow",
                VisitMode::Both,
                "$95+ / session",
            ),
            provider(
                "Jordan Rivera, LCSW",
                "Therapist",
                &["Depression", "Burnout", "Mindfulness"],
                4.8,
                198,
                "In 2 days",
                VisitMode::Virtual,
                "$75+ / session",
            ),
            provider(
                "Ava Patel, PMHNP",
                "Medication Provider",
                &["Medication", "ADHD", "Anxiety"],
                4.7,
                141,
                "This week",
                VisitMode::Virtual,
                "$120+ / visit",
            ),
            provider(
                "Sam Nguyen, LMFT",
                "Couples Therapist",
                &["Relationships", "Communication", "Couples"],
                4.9,
                224,
                "Tomorrow",
                VisitMode::Both,
                "$110+ / session",
            ),
            provider(
                "Elena Garcia, LPC",
                "Therapist",
                &["Grief", "Stress", "Teens"],
                4.8,
                167,
                "In 3 days",
                VisitMode::InPerson,
                "$85+ / session",
            ),
            provider(
                "Chris Walker, MD",
                "Psychiatrist",
                &["Medication", "Depression", "Sleep"],
                4.6,
                96,
                "Next week",
                VisitMode::Virtual,
                "$160+ / visit",
            ),
        ];

        let testimonials = vec![
            Testimonial {
                quote: "I booked my first session in under 10 minutes and found someone who actually matched my vibe.".into(),
                name: "Riley".into(),
                detail: "Virtual therapy".into(),
            },
            Testimonial {
                quote: "Transparent pricing and real availability made this feel way less intimidating than starting from scratch.".into(),
                name: "Sam".into(),
                detail: "In\u{2011}person care".into(),
            },
            Testimonial {
                quote: "Loved having profiles, specialties, and next openings all in one spot.".into(),
                name: "Avery".into(),
                detail: "Medication visits".into(),
            },
        ];

        let faqs = vec![
            Faq {
                question: "Do you offer insurance billing?".into(),
                answer: "Not in this version. This UI is built around transparent self-pay pricing (you can add insurance later if you want).".into(),
            },
            Faq {
                question: "Can I do online and in\u{2011}person sessions?".into(),
                answer: "Yes. Providers can list virtual, in\u{2011}person, or both, and you can filter by preference.".into(),
            },
            Faq {
                question: "How fast can I get an appointment?".into(),
                answer: "Availability is shown up front so you can book quickly without back-and-forth messages.".into(),
            },
            Faq {
                question: "Can I switch providers if it\u{2019}s not a fit?".into(),
                answer: "Absolutely. The UI includes a rematch concept so people can change providers easily.".into(),
            },
        ];

        Self {
            providers,
            specialties,
            testimonials,
            faqs,
            countries: default_countries(),
        }
    }
}

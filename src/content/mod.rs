//! Static site content.
//!
//! Marketing copy, team facts and legal text ship inside the binary;
//! only account and billing data comes from the API. Everything here is
//! `'static` so SSR and the hydrated client render the same bytes.

pub mod blog;
pub mod devices;

pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
}

pub struct Milestone {
    pub year: &'static str,
    pub event: &'static str,
}

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Pavit Singh",
        role: "Founder & CEO",
        bio: "Spent a decade building SCADA integrations before deciding factory \
              telemetry deserved consumer-grade software.",
    },
    TeamMember {
        name: "Asha Rao",
        role: "Head of Engineering",
        bio: "Leads the platform team. Previously shipped fleet tooling for a \
              logistics unicorn.",
    },
    TeamMember {
        name: "Dev Mehta",
        role: "Head of Customer Success",
        bio: "Onboards every pilot personally and still answers the support inbox \
              on weekends.",
    },
];

pub const MILESTONES: &[Milestone] = &[
    Milestone {
        year: "2019",
        event: "Founded in Pune; first pilot with 40 sensors in a packaging plant.",
    },
    Milestone {
        year: "2021",
        event: "Crossed 10,000 connected devices and opened the self-serve dashboard.",
    },
    Milestone {
        year: "2023",
        event: "Launched alert rules and scheduled reports.",
    },
    Milestone {
        year: "2025",
        event: "Monitoring 120,000 devices across 14 countries.",
    },
];

pub struct LegalSection {
    pub heading: &'static str,
    pub body: &'static str,
}

pub struct LegalDoc {
    pub slug: &'static str,
    pub title: &'static str,
    pub updated: &'static str,
    pub sections: &'static [LegalSection],
}

pub const LEGAL_DOCS: &[LegalDoc] = &[
    LegalDoc {
        slug: "privacy",
        title: "Privacy Policy",
        updated: "January 2025",
        sections: &[
            LegalSection {
                heading: "What we collect",
                body: "Account details you give us (name, email), billing records, and \
                       the telemetry your devices send to your workspace. We do not buy \
                       or sell data about you.",
            },
            LegalSection {
                heading: "Cookies",
                body: "We set first-party cookies for sign-in only after you accept the \
                       cookie banner. If you decline, sign-in state is kept in your \
                       browser's local storage instead and nothing is sent to third \
                       parties.",
            },
            LegalSection {
                heading: "Retention",
                body: "Telemetry is retained for the window your plan specifies. Account \
                       records are kept while the account exists and for 90 days after \
                       deletion for billing compliance.",
            },
            LegalSection {
                heading: "Contact",
                body: "Questions about this policy go to privacy@pavitinfotech.com.",
            },
        ],
    },
    LegalDoc {
        slug: "terms",
        title: "Terms of Service",
        updated: "January 2025",
        sections: &[
            LegalSection {
                heading: "The service",
                body: "Pavit IoT provides device monitoring dashboards, alerting and \
                       reporting over telemetry you connect. You are responsible for the \
                       devices themselves and for the lawfulness of what they measure.",
            },
            LegalSection {
                heading: "Subscriptions and refunds",
                body: "Plans bill in advance on a monthly or yearly interval. You can \
                       request a refund of the most recent charge from the billing page; \
                       reverting to your previous plan takes effect immediately.",
            },
            LegalSection {
                heading: "Acceptable use",
                body: "No attempts to disrupt the service, probe other tenants' data, or \
                       relay telemetry you have no right to collect.",
            },
            LegalSection {
                heading: "Liability",
                body: "The service is provided as-is. Our aggregate liability is capped \
                       at the fees you paid in the preceding twelve months.",
            },
        ],
    },
];

pub fn legal_doc(slug: &str) -> Option<&'static LegalDoc> {
    LEGAL_DOCS.iter().find(|doc| doc.slug == slug)
}

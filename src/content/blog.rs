//! Blog posts. Written at build time; the site has no CMS.

pub struct BlogPost {
    pub slug: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub author: &'static str,
    pub date: &'static str,
    pub tag: &'static str,
    pub body: &'static [&'static str],
}

pub fn all() -> &'static [BlogPost] {
    POSTS
}

pub fn by_slug(slug: &str) -> Option<&'static BlogPost> {
    POSTS.iter().find(|post| post.slug == slug)
}

static POSTS: &[BlogPost] = &[
    BlogPost {
        slug: "why-your-sensors-lie",
        title: "Why your sensors lie, and how to catch them at it",
        excerpt: "Drift, clipping and silent death are the three ways a sensor \
                  misleads you. Here is how our alert rules spot each one.",
        author: "Asha Rao",
        date: "2025-05-12",
        tag: "Engineering",
        body: &[
            "Every monitoring rollout we have seen starts the same way: the \
             dashboard lights up, everyone trusts the numbers, and three months \
             later someone discovers a probe that has been reading four degrees \
             high since the day it was mounted next to a compressor.",
            "Sensors fail in three recognisable shapes. Drift is the slow walk \
             away from truth. Clipping is a value pinned at the edge of its \
             range. Silent death is the cruellest: the device keeps its \
             heartbeat while its measurement channel stops updating.",
            "The rule builder ships with templates for all three. A drift rule \
             compares a sensor against the median of its group; a clipping rule \
             fires on repeated min/max readings; a staleness rule watches the \
             gap between heartbeat and last changed value.",
            "None of this needs machine learning. It needs the right comparison \
             at the right window, which is exactly what the rule graph lets you \
             wire up in a minute.",
        ],
    },
    BlogPost {
        slug: "heatmaps-for-ops-teams",
        title: "Reading a week at a glance: heatmaps for ops teams",
        excerpt: "A day-by-hour heatmap turns ten thousand readings into one \
                  picture. What to look for in yours.",
        author: "Dev Mehta",
        date: "2025-03-28",
        tag: "Product",
        body: &[
            "Line charts answer \"what happened at 14:06\". Heatmaps answer a \
             better question for operations: \"what does a normal Tuesday look \
             like, and which hours stopped being normal\".",
            "Vertical bands are schedule effects: shift changes, cleaning \
             cycles, HVAC setbacks. Horizontal bands are equipment effects, one \
             machine running warm across every shift.",
            "The dashboard heatmap buckets the selected metric into day rows \
             and hour columns. Intensity is normalised per device, so a chiller \
             and a boiler can sit side by side and still be comparable.",
            "Pin the heatmap next to the comparison panel and anomalies mostly \
             explain themselves before anyone opens a ticket.",
        ],
    },
    BlogPost {
        slug: "pricing-transparency",
        title: "How we price device monitoring",
        excerpt: "No per-seat charges, no data egress fees. You pay for device \
                  slots and retention, nothing else.",
        author: "Pavit Singh",
        date: "2025-02-10",
        tag: "Company",
        body: &[
            "Monitoring pricing in this industry tends to hide the real cost in \
             per-message fees that only reveal themselves with the first \
             invoice. We price the only two things that cost us money: device \
             slots and how long we keep your telemetry.",
            "Every plan includes unlimited users. Ops teams grow, and charging \
             you per login just discourages the plant manager from opening the \
             dashboard.",
            "Upgrades are prorated to the day. Downgrades and refunds are \
             self-serve from the billing page; reverting to your previous plan \
             never requires a support ticket.",
        ],
    },
    BlogPost {
        slug: "from-pilot-to-plant",
        title: "From a 40-sensor pilot to a full plant rollout",
        excerpt: "What we learned shipping our first pilot in 2019, and the \
                  checklist we now give every new customer.",
        author: "Pavit Singh",
        date: "2024-11-05",
        tag: "Company",
        body: &[
            "Our first pilot was forty temperature probes in a packaging plant \
             outside Pune. The hardware took a weekend. The politics took a \
             quarter.",
            "The lesson that stuck: a monitoring rollout succeeds when the \
             people being measured see the dashboard before their managers do. \
             We now set up the operator view on day one, alerts last.",
            "Six years later the checklist is four steps. Connect a gateway, \
             name your sites, pick the three metrics that already cause \
             arguments, and only then open the rule builder.",
        ],
    },
];

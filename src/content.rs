//! Static landing page copy

pub const COMPANY: &str = "GENDALF";

pub const TAGLINE: &str = "Your dream career starts here";

pub const HERO_TITLE: &str = "Welcome to GENDALF!";

pub const HERO_TEXT: &str = "We are ready to share the secret of why we love the company we work for. \
If our values and ideas feel close to you, go ahead and sign up for an interview!";

pub const VALUES_TITLE: &str = "Our values say more about us";

pub const VALUES_TEXT: &str =
    "Take a closer look at what matters to us and get to know the team through our principles.";

pub const NEWS_TITLE: &str = "Live feed";

/// Detail text shown under the active news card
pub const NEWS_DETAIL: &str =
    "Details about this article. Learn more about our latest news and events.";

pub const FORM_TITLE: &str = "Sign up for an interview";

/// One company value card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompanyValue {
    pub title: &'static str,
    pub description: &'static str,
}

pub const VALUES: [CompanyValue; 5] = [
    CompanyValue {
        title: "Be a team",
        description: "Be ready to contribute to the team's shared goals and reach them.",
    },
    CompanyValue {
        title: "Win and never give up",
        description: "Stay focused on results, be persistent and do not give in to difficulties.",
    },
    CompanyValue {
        title: "Care about clients",
        description: "Keep promises and take an interest in what our clients need.",
    },
    CompanyValue {
        title: "Be passionate and responsible",
        description: "Put your heart into the work and enjoy doing it.",
    },
    CompanyValue {
        title: "Keep growing",
        description: "Grow personally and professionally to reach the goals we set.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewsItem {
    pub title: &'static str,
}

pub const NEWS: [NewsItem; 4] = [
    NewsItem {
        title: "Saving paper and guessing films: March 2022 video digest",
    },
    NewsItem {
        title: "What changes in 2022",
    },
    NewsItem {
        title: "Why work as a programmer in 2022",
    },
    NewsItem {
        title: "Automated simplified tax and waybills: March 2022 news digest",
    },
];

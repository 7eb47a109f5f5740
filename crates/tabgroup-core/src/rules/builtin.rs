//! Builtin category tables.
//!
//! Domain lists are disjoint across categories. Keywords are matched as raw
//! substrings of the lowercased URL and title, so short keywords are avoided.

pub(super) const DOMAIN_RULES: &[(&str, &[&str])] = &[
    (
        "Development",
        &[
            "github.com",
            "gitlab.com",
            "bitbucket.org",
            "stackoverflow.com",
            "stackexchange.com",
            "developer.mozilla.org",
            "docs.rs",
            "crates.io",
            "npmjs.com",
            "pypi.org",
            "codepen.io",
            "codesandbox.io",
            "replit.com",
            "vercel.com",
            "netlify.com",
            "hub.docker.com",
            "rust-lang.org",
            "go.dev",
        ],
    ),
    (
        "Social Media",
        &[
            "facebook.com",
            "twitter.com",
            "x.com",
            "instagram.com",
            "linkedin.com",
            "reddit.com",
            "tiktok.com",
            "pinterest.com",
            "tumblr.com",
            "mastodon.social",
            "threads.net",
            "snapchat.com",
            "discord.com",
        ],
    ),
    (
        "Shopping",
        &[
            "amazon.com",
            "ebay.com",
            "etsy.com",
            "walmart.com",
            "target.com",
            "bestbuy.com",
            "aliexpress.com",
            "shopify.com",
            "ikea.com",
            "costco.com",
            "wayfair.com",
            "zalando.com",
        ],
    ),
    (
        "Entertainment",
        &[
            "youtube.com",
            "netflix.com",
            "twitch.tv",
            "spotify.com",
            "hulu.com",
            "disneyplus.com",
            "primevideo.com",
            "soundcloud.com",
            "imdb.com",
            "vimeo.com",
            "crunchyroll.com",
            "steampowered.com",
        ],
    ),
    (
        "News",
        &[
            "nytimes.com",
            "bbc.com",
            "bbc.co.uk",
            "cnn.com",
            "theguardian.com",
            "reuters.com",
            "apnews.com",
            "washingtonpost.com",
            "bloomberg.com",
            "wsj.com",
            "npr.org",
            "aljazeera.com",
            "news.ycombinator.com",
        ],
    ),
    (
        "Productivity",
        &[
            "docs.google.com",
            "drive.google.com",
            "mail.google.com",
            "calendar.google.com",
            "notion.so",
            "trello.com",
            "asana.com",
            "slack.com",
            "figma.com",
            "airtable.com",
            "monday.com",
            "outlook.office.com",
            "dropbox.com",
            "todoist.com",
            "miro.com",
        ],
    ),
    (
        "Learning",
        &[
            "wikipedia.org",
            "coursera.org",
            "udemy.com",
            "edx.org",
            "khanacademy.org",
            "duolingo.com",
            "scholar.google.com",
            "arxiv.org",
            "medium.com",
            "britannica.com",
            "quizlet.com",
            "codecademy.com",
        ],
    ),
    (
        "Finance",
        &[
            "paypal.com",
            "chase.com",
            "bankofamerica.com",
            "wellsfargo.com",
            "coinbase.com",
            "binance.com",
            "robinhood.com",
            "fidelity.com",
            "vanguard.com",
            "schwab.com",
            "mint.intuit.com",
            "finance.yahoo.com",
            "investing.com",
        ],
    ),
];

pub(super) const KEYWORD_RULES: &[(&str, &[&str])] = &[
    (
        "Development",
        &[
            "documentation",
            "debug",
            "compiler",
            "pull request",
            "stack trace",
            "rustlang",
            "javascript",
            "typescript",
            "python",
            "kubernetes",
            "api reference",
            "refactor",
        ],
    ),
    (
        "Research",
        &[
            "research",
            "paper",
            "study",
            "journal",
            "thesis",
            "citation",
            "survey",
            "analysis",
        ],
    ),
    (
        "Shopping",
        &[
            "shopping cart",
            "checkout",
            "add to cart",
            "price",
            "discount",
            "coupon",
            "free shipping",
        ],
    ),
    (
        "Entertainment",
        &[
            "movie",
            "trailer",
            "episode",
            "playlist",
            "music",
            "gameplay",
            "livestream",
        ],
    ),
    (
        "News",
        &[
            "breaking",
            "headline",
            "news",
            "politics",
            "election",
            "opinion",
            "weather",
        ],
    ),
    (
        "Travel",
        &[
            "flight",
            "hotel",
            "booking",
            "itinerary",
            "vacation",
            "airbnb",
            "round trip",
        ],
    ),
    (
        "Finance",
        &[
            "bank",
            "invest",
            "stock",
            "crypto",
            "mortgage",
            "budget",
            "tax return",
            "portfolio",
        ],
    ),
    (
        "Learning",
        &[
            "tutorial",
            "course",
            "lesson",
            "learn",
            "guide",
            "how to",
            "lecture",
            "exercise",
        ],
    ),
];

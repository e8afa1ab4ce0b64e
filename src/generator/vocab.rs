//! Word lists the synthetic generator draws from.

pub const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda",
    "David", "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph",
    "Jessica", "Thomas", "Sarah", "Carlos", "Nancy", "Daniel", "Margaret", "Ahmed",
    "Lisa", "Kenji", "Sofia", "Pierre", "Amara", "Henrik", "Priya",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
    "Rodriguez", "Martinez", "Hernandez", "Lopez", "Wilson", "Anderson", "Thomas",
    "Taylor", "Moore", "Jackson", "Nguyen", "Kim", "Patel", "Chen", "Okafor",
    "Larsson", "Dubois", "Tanaka", "Novak", "Silva", "Khan", "Costa",
];

pub const COMPANY_STEMS: &[&str] = &[
    "Apex", "Summit", "Vertex", "Cascade", "Horizon", "Pinnacle", "Quantum",
    "Sterling", "Meridian", "Beacon", "Catalyst", "Keystone", "Northwind",
    "Bluepeak", "Ironwood", "Clearwater", "Redstone", "Silverline", "Brightway",
    "Evergreen",
];

pub const COMPANY_SUFFIXES: &[&str] = &[
    "Inc", "LLC", "Group", "Labs", "Systems", "Partners", "Solutions", "Industries",
    "Holdings", "Technologies",
];

pub const EMAIL_DOMAINS: &[&str] = &[
    "example.com", "mail.example.com", "corp.example.org", "biz.example.net",
];

pub const PRODUCT_ADJECTIVES: &[&str] = &[
    "Enterprise", "Premium", "Standard", "Advanced", "Essential", "Professional",
    "Compact", "Modular", "Unified", "Managed",
];

pub const PRODUCT_NOUNS: &[&str] = &[
    "Software License", "Consulting Services", "Support Plan", "Analytics Suite",
    "Cloud Subscription", "Hardware Bundle", "Training Package", "Data Platform",
    "Security Audit", "Integration Toolkit",
];

pub const SALE_CATEGORIES: &[&str] = &[
    "Software", "Services", "Hardware", "Consulting", "Support",
];

pub const LOREM_WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit",
    "sed", "do", "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore",
    "magna", "aliqua", "enim", "ad", "minim", "veniam", "quis", "nostrud",
    "exercitation", "ullamco", "laboris", "nisi", "aliquip", "ex", "ea", "commodo",
    "consequat",
];

//! Static keyword tables shared by the pattern passes.
//!
//! All entries are lowercase. Order matters: the location passes stop at the
//! first accepted term and the skills pass reports hits in table order.

/// Major population centres across the markets ApplyFirst serves.
pub const CITIES: &[&str] = &[
    // United States
    "new york",
    "los angeles",
    "san francisco",
    "san jose",
    "san diego",
    "seattle",
    "chicago",
    "boston",
    "austin",
    "dallas",
    "houston",
    "denver",
    "atlanta",
    "miami",
    "phoenix",
    "philadelphia",
    "portland",
    "washington",
    "minneapolis",
    "detroit",
    "nashville",
    "pittsburgh",
    "raleigh",
    "salt lake city",
    "las vegas",
    // India
    "mumbai",
    "new delhi",
    "delhi",
    "bangalore",
    "bengaluru",
    "hyderabad",
    "chennai",
    "kolkata",
    "pune",
    "ahmedabad",
    "jaipur",
    "noida",
    "gurgaon",
    "gurugram",
    "kochi",
    "chandigarh",
    "indore",
    // United Kingdom and Ireland
    "london",
    "manchester",
    "birmingham",
    "edinburgh",
    "glasgow",
    "leeds",
    "bristol",
    "liverpool",
    "cambridge",
    "oxford",
    "reading",
    "dublin",
    // Canada
    "toronto",
    "vancouver",
    "montreal",
    "calgary",
    "ottawa",
    "waterloo",
    // Australia and New Zealand
    "sydney",
    "melbourne",
    "brisbane",
    "perth",
    "adelaide",
    "canberra",
    "auckland",
    // Europe
    "paris",
    "berlin",
    "munich",
    "hamburg",
    "amsterdam",
    "madrid",
    "barcelona",
    "lisbon",
    "rome",
    "milan",
    "zurich",
    "stockholm",
    "copenhagen",
    "warsaw",
    // Asia and Middle East
    "singapore",
    "tokyo",
    "hong kong",
    "dubai",
    "abu dhabi",
    "tel aviv",
];

/// First-level administrative regions. Two-letter abbreviations are left out
/// on purpose; they collide with ordinary words ("in", "or", "me").
pub const STATES: &[&str] = &[
    // United States
    "california",
    "new york",
    "texas",
    "florida",
    "illinois",
    "massachusetts",
    "washington",
    "colorado",
    "georgia",
    "north carolina",
    "virginia",
    "new jersey",
    "pennsylvania",
    "ohio",
    "michigan",
    "arizona",
    "oregon",
    "minnesota",
    "tennessee",
    "utah",
    // India
    "maharashtra",
    "karnataka",
    "tamil nadu",
    "telangana",
    "andhra pradesh",
    "kerala",
    "gujarat",
    "rajasthan",
    "uttar pradesh",
    "west bengal",
    "haryana",
    "punjab",
    "madhya pradesh",
    // Canada
    "ontario",
    "british columbia",
    "quebec",
    "alberta",
    // Australia
    "new south wales",
    "victoria",
    "queensland",
    // United Kingdom
    "england",
    "scotland",
    "wales",
];

pub const COUNTRIES: &[&str] = &[
    "united states",
    "usa",
    "india",
    "united kingdom",
    "uk",
    "britain",
    "canada",
    "australia",
    "new zealand",
    "ireland",
    "germany",
    "france",
    "netherlands",
    "spain",
    "portugal",
    "italy",
    "switzerland",
    "sweden",
    "denmark",
    "poland",
    "singapore",
    "japan",
    "china",
    "united arab emirates",
    "uae",
    "israel",
    "brazil",
    "mexico",
    "south africa",
    "nigeria",
    "pakistan",
    "bangladesh",
    "philippines",
];

/// Country spellings that normalise to something other than their title case.
pub const COUNTRY_ALIASES: &[(&str, &str)] = &[
    ("usa", "United States"),
    ("uk", "United Kingdom"),
    ("britain", "United Kingdom"),
    ("uae", "United Arab Emirates"),
];

/// Words that mark a nearby city mention as an actual location.
pub const LOCATION_INDICATORS: &[&str] = &[
    "address",
    "location",
    "based",
    "city",
    "live",
    "residence",
    "from",
];

/// Technology and process vocabulary for the skills pass.
pub const SKILLS: &[&str] = &[
    "javascript",
    "typescript",
    "python",
    "java",
    "c++",
    "c#",
    "golang",
    "rust",
    "ruby",
    "php",
    "swift",
    "kotlin",
    "scala",
    "sql",
    "html",
    "css",
    "react",
    "angular",
    "vue",
    "node.js",
    "express",
    "django",
    "flask",
    "spring",
    "rails",
    ".net",
    "graphql",
    "postgresql",
    "mysql",
    "mongodb",
    "redis",
    "elasticsearch",
    "kafka",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "terraform",
    "jenkins",
    "git",
    "linux",
    "ci/cd",
    "devops",
    "machine learning",
    "deep learning",
    "tensorflow",
    "pytorch",
    "pandas",
    "tableau",
    "excel",
    "figma",
    "agile",
    "scrum",
    "jira",
    "salesforce",
    "seo",
    "project management",
    "product management",
];

/// Role, seniority and function words for the job-title fallback.
pub const ROLE_KEYWORDS: &[&str] = &[
    "developer",
    "engineer",
    "manager",
    "lead",
    "product",
    "designer",
    "analyst",
    "consultant",
    "architect",
    "scientist",
    "director",
    "specialist",
    "administrator",
    "coordinator",
    "executive",
    "officer",
    "intern",
    "programmer",
    "senior",
    "junior",
    "principal",
    "head of",
    "recruiter",
    "marketing",
    "sales",
];

/// Title keywords recognised in "<title> at <company>" lines.
pub const TITLE_AT_KEYWORDS: &[&str] = &[
    "engineer",
    "developer",
    "manager",
    "analyst",
    "designer",
    "consultant",
    "architect",
    "scientist",
    "specialist",
    "director",
    "lead",
    "intern",
];

/// Section headers that open the employment history, most specific first.
pub const EXPERIENCE_HEADERS: &[&str] = &[
    "professional experience",
    "work history",
    "employment",
    "experience",
];

pub const EDUCATION_INDICATORS: &[&str] =
    &["university", "college", "bachelor", "master", "degree"];

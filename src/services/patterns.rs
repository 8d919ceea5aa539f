//! Signal pattern tables, one named table per category.
//!
//! Tables are versioned data, not control flow: categories are matched,
//! capped and scored independently, so a table can be extended or tested
//! without touching the extraction machinery. Patterns run case-insensitively
//! over the lower-cased page text.

/// Infrastructure and server needs.
pub const INFRASTRUCTURE_PATTERNS: &[&str] = &[
    r"(?:server|hosting|infrastructure|cloud|on-premise|data center|hardware) (?:needs?|requirements?|challenges?|issues?|problems?|upgrades?|migration)",
    r"(?:looking for|need|require|seeking) (?:new )?(?:servers?|workstations?|networking|storage|backup)",
    r"(?:performance|speed|capacity|storage|memory|processing) (?:issues?|problems?|bottlenecks?|limitations?)",
    r"(?:scaling|expanding|growing) (?:infrastructure|systems?|operations?|team)",
    r"(?:outdated|legacy|old|aging) (?:systems?|hardware|equipment|infrastructure)",
];

/// Growth and expansion indicators.
pub const GROWTH_PATTERNS: &[&str] = &[
    r"(?:hiring|recruiting|adding|expanding) (?:\w+ )?(?:team|developers?|engineers?|staff)",
    r"(?:new office|additional location|expanding to|opening in)",
    r"(?:raised|funding|investment|series [abc]|venture capital)",
    r"(?:growing|scaling|expanding) (?:rapidly|quickly|fast|business|operations)",
    r"(?:remote work|hybrid|distributed team|work from home) (?:setup|infrastructure|needs)",
    r"(?:\d+)% (?:growth|increase) in (?:team|revenue|business)",
];

/// Technical pain points.
pub const PAIN_POINT_PATTERNS: &[&str] = &[
    r"(?:slow|sluggish|performance|speed) (?:systems?|applications?|processes?|workflows?)",
    r"(?:security|compliance|data protection|backup|disaster recovery) (?:concerns?|issues?|requirements?|needs?)",
    r"(?:downtime|outages?|system failures?|crashes?|reliability issues?)",
    r"(?:integration|compatibility|connectivity) (?:problems?|challenges?|issues?)",
    r"(?:budget|cost|expensive|affordable) (?:constraints?|concerns?|solutions?|hardware)",
    r"(?:manual processes?|inefficient|time-consuming|repetitive tasks?)",
];

/// Decision maker mentions.
pub const DECISION_MAKER_PATTERNS: &[&str] = &[
    r"(?:cto|chief technology officer|it director|it manager|head of it|technical lead)",
    r"(?:operations? manager|head of operations?|ops lead)",
    r"(?:procurement|purchasing|buying|vendor management)",
    r"(?:budget approval|purchasing decisions?|it spending|technology investments?)",
];

/// Technology stack and infrastructure mentions.
pub const TECH_STACK_PATTERNS: &[&str] = &[
    // Cloud and hosting
    r"(?:aws|amazon web services|azure|google cloud|gcp|digital ocean|linode)",
    r"(?:cloud|hosting|saas|paas|iaas|hybrid cloud|multi-cloud)",
    // Development and devops
    r"(?:docker|kubernetes|containers?|microservices)",
    r"(?:ci/cd|continuous integration|devops|automation)",
    // Databases and storage
    r"(?:mysql|postgresql|mongodb|redis|elasticsearch|database)",
    r"(?:storage|backup|disaster recovery|data management)",
    // Programming and frameworks
    r"(?:python|javascript|react|node\.?js|angular|vue|java|\.net)",
    r"(?:web development|mobile development|software development)",
    // Infrastructure tools
    r"(?:nginx|apache|load balancer|cdn|ssl|security)",
    r"(?:monitoring|logging|analytics|performance tracking)",
];

/// Workstation and hardware opportunities.
pub const HARDWARE_OPPORTUNITY_PATTERNS: &[&str] = &[
    r"(?:workstations?|desktops?|laptops?|computers?) (?:for|needed|required)",
    r"(?:high-performance|gaming|graphics?) (?:computers?|workstations?|rigs?)",
    r"(?:development|programming|coding|design) (?:machines?|workstations?|setups?)",
    r"(?:video editing|3d rendering|cad|design) (?:computers?|workstations?)",
    r"(?:networking|switches?|routers?|access points?) (?:equipment|hardware|setup)",
    r"(?:storage|nas|san|backup) (?:solutions?|systems?|hardware)",
];

/// Urgency signals.
pub const URGENCY_PATTERNS: &[&str] = &[
    r"(?:urgent|asap|immediately|quickly|soon) (?:need|require|looking)",
    r"(?:deadline|timeline|by (?:end of|q[1-4]|january|february|march|april|may|june|july|august|september|october|november|december))",
    r"(?:budget allocated|approved budget|ready to purchase|ready to buy)",
    r"(?:rfp|request for proposal|quotes?|proposals?|vendors?)",
    r"(?:project starting|implementation|rollout|deployment) (?:soon|scheduled|planned)",
];

/// Company size and scale indicators.
pub const COMPANY_SCALE_PATTERNS: &[&str] = &[
    r"(?:\d+(?:\+|plus)) (?:employees?|team members?|staff)",
    r"(?:startup|scale-up|growing company|established company)",
    r"(?:series [abc]|funding|investment|revenue of \$?\d+)",
    r"(?:multiple offices?|locations?|branches?|sites?)",
    r"(?:international|global|worldwide|multiple countries?)",
];

/// Budget and financial indicators. Each pattern captures the decimal
/// amount; matches are rendered as `Financial indicator: $<amount>`.
pub const BUDGET_PATTERNS: &[&str] = &[
    r"budget of \$?(\d+(?:,\d+)*(?:\.\d+)?)\s*(?:million|thousand|k|m)?",
    r"revenue of \$?(\d+(?:,\d+)*(?:\.\d+)?)\s*(?:million|thousand|k|m)?",
    r"funding of \$?(\d+(?:,\d+)*(?:\.\d+)?)\s*(?:million|thousand|k|m)?",
    r"raised \$?(\d+(?:,\d+)*(?:\.\d+)?)\s*(?:million|thousand|k|m)?",
    r"(?:investment|capital|funding|raised|budget|revenue)\s+(?:of\s+)?\$?(\d+(?:,\d+)*(?:\.\d+)?)\s*(?:million|thousand|k|m)?",
];

/// Mission/specialization sentence templates used for free-text business
/// context. The capture is the phrase itself.
pub const BUSINESS_CONTEXT_PATTERNS: &[&str] = &[
    r"we (?:help|enable|empower|support) (?:companies|businesses|organizations|clients) (?:to )?([^.]{10,80})",
    r"our mission is (?:to )?([^.]{10,80})",
    r"we specialize in ([^.]{10,80})",
    r"(?:focused on|committed to|dedicated to) ([^.]{10,80})",
];

/// Industry tags detected by plain keyword presence, in emission order.
pub const INDUSTRY_KEYWORDS: &[(&str, &[&str])] = &[
    ("fintech", &["financial", "banking", "payments", "fintech", "trading"]),
    ("healthcare", &["healthcare", "medical", "hospital", "patient", "clinical"]),
    ("ecommerce", &["ecommerce", "retail", "shopping", "marketplace", "online store"]),
    ("saas", &["saas", "software as a service", "subscription", "cloud platform"]),
    ("startup", &["startup", "early-stage", "seed", "series a", "founders"]),
];

//! Bundled sample catalog
//!
//! Fifteen policies, five per type, shown whenever the backend is
//! unreachable or returns nothing.

use poliscope_domain::{Policy, PolicyType};

struct Seed {
    id: &'static str,
    policy_type: PolicyType,
    company: &'static str,
    name: &'static str,
    short_description: &'static str,
    price_range: &'static str,
    must_have: &'static [&'static str],
    good_to_have: &'static [&'static str],
    add_ons: &'static [&'static str],
    rating: f64,
    reviews_count: u32,
}

impl Seed {
    fn build(&self) -> Policy {
        Policy {
            id: self.id.to_string(),
            policy_type: self.policy_type,
            company: self.company.to_string(),
            name: self.name.to_string(),
            short_description: self.short_description.to_string(),
            price_range: self.price_range.to_string(),
            must_have: self.must_have.iter().map(|s| s.to_string()).collect(),
            good_to_have: self.good_to_have.iter().map(|s| s.to_string()).collect(),
            add_ons: self.add_ons.iter().map(|s| s.to_string()).collect(),
            rating: self.rating,
            reviews_count: self.reviews_count,
            product_uin: None,
        }
    }
}

const HEALTH_MUST_HAVE: &[&str] = &[
    "Claim Settlement Ratio.",
    "Hospital Network.",
    "Room Rent.",
    "Copayment.",
    "Restoration Benefit.",
    "Pre & Post Hospitalisation Coverage",
];

const HEALTH_GOOD_TO_HAVE: &[&str] = &[
    "Waiting Period.",
    "No Claim Bonus.",
    "Disease Sub limits.",
    "Alternate Treatment Coverage.",
    "Maternity Care.",
    "Newborn Care.",
    "Health Checkups.",
];

const HEALTH_ADD_ONS: &[&str] = &[
    "Domiciliary.",
    "Outpatient Department.",
    "Lifelong Renewal.",
    "Critical Illness Rider.",
    "Accident & Disability Ride.",
];

const SEEDS: &[Seed] = &[
    Seed {
        id: "health-cocure",
        policy_type: PolicyType::Health,
        company: "Cocure Insurance",
        name: "Cocure Health Plan",
        short_description: "Comprehensive health coverage for individuals and families.",
        price_range: "5,000 - 20,000 / year",
        must_have: HEALTH_MUST_HAVE,
        good_to_have: HEALTH_GOOD_TO_HAVE,
        add_ons: HEALTH_ADD_ONS,
        rating: 4.5,
        reviews_count: 1200,
    },
    Seed {
        id: "health-primecare",
        policy_type: PolicyType::Health,
        company: "PrimeCare Health",
        name: "PrimeCare Family Floater",
        short_description: "Flexible health plan covering entire family under one policy.",
        price_range: "8,000 - 30,000 / year",
        must_have: HEALTH_MUST_HAVE,
        good_to_have: HEALTH_GOOD_TO_HAVE,
        add_ons: HEALTH_ADD_ONS,
        rating: 4.4,
        reviews_count: 800,
    },
    Seed {
        id: "health-medishield",
        policy_type: PolicyType::Health,
        company: "MediShield Plus",
        name: "MediShield Platinum",
        short_description: "Premium health insurance with international coverage options.",
        price_range: "15,000 - 50,000 / year",
        must_have: HEALTH_MUST_HAVE,
        good_to_have: HEALTH_GOOD_TO_HAVE,
        add_ons: HEALTH_ADD_ONS,
        rating: 4.8,
        reviews_count: 650,
    },
    Seed {
        id: "health-guardian",
        policy_type: PolicyType::Health,
        company: "Guardian Health",
        name: "Guardian Family Care",
        short_description: "Affordable family health plan with extensive network.",
        price_range: "7,000 - 25,000 / year",
        must_have: HEALTH_MUST_HAVE,
        good_to_have: HEALTH_GOOD_TO_HAVE,
        add_ons: HEALTH_ADD_ONS,
        rating: 4.2,
        reviews_count: 1050,
    },
    Seed {
        id: "health-star",
        policy_type: PolicyType::Health,
        company: "Star Health",
        name: "Star Comprehensive Plan",
        short_description: "Wide coverage with add-on benefits for complete health protection.",
        price_range: "6,000 - 22,000 / year",
        must_have: HEALTH_MUST_HAVE,
        good_to_have: HEALTH_GOOD_TO_HAVE,
        add_ons: HEALTH_ADD_ONS,
        rating: 4.6,
        reviews_count: 1500,
    },
    Seed {
        id: "term-lifeshield",
        policy_type: PolicyType::Term,
        company: "Life Shield Insurance",
        name: "Life Shield Term Plan",
        short_description: "Financial security for your loved ones up to age 65.",
        price_range: "10,000 - 30,000 / year",
        must_have: &[
            "High sum assured at affordable premiums.",
            "Death benefit paid as lump sum.",
            "Critical illness rider available.",
            "Accidental death benefit rider.",
            "Tax benefits under Section 80C and 10(10D).",
        ],
        good_to_have: &["Suicide within the first 12 months.", "Fraudulent claims."],
        add_ons: &["Age: 18-60 years.", "Policy term up to 65 years of age."],
        rating: 4.7,
        reviews_count: 950,
    },
    Seed {
        id: "term-familysecure",
        policy_type: PolicyType::Term,
        company: "SecureLife Solutions",
        name: "Family Secure Term Plan",
        short_description: "Ensures long-term financial stability for your family.",
        price_range: "12,000 - 40,000 / year",
        must_have: &[
            "Flexible premium payment options.",
            "Increased cover at key life stages (marriage, childbirth).",
            "Option to receive maturity benefit (Return of Premium).",
            "Terminal illness benefit.",
        ],
        good_to_have: &[
            "Self-inflicted injury.",
            "Participation in criminal activities.",
        ],
        add_ons: &["Age: 20-55 years.", "Policy term up to 75 years."],
        rating: 4.6,
        reviews_count: 1100,
    },
    Seed {
        id: "term-futureprotect",
        policy_type: PolicyType::Term,
        company: "FutureProtect Life",
        name: "FutureProtect Income Plan",
        short_description: "Provides regular income to your family in your absence.",
        price_range: "8,000 - 28,000 / year",
        must_have: &[
            "Monthly income payout to beneficiaries.",
            "Increasing income option to beat inflation.",
            "Waiver of premium on disability.",
            "Accelerated death benefit.",
        ],
        good_to_have: &[
            "Acts of terrorism (specific conditions apply).",
            "Consumption of illegal drugs.",
        ],
        add_ons: &["Age: 21-50 years.", "Policy term: 10-40 years."],
        rating: 4.5,
        reviews_count: 720,
    },
    Seed {
        id: "term-digitalsecure",
        policy_type: PolicyType::Term,
        company: "Digital Secure Insurance",
        name: "Digital Term Assurance",
        short_description: "Online-only term plan with competitive rates and easy application.",
        price_range: "7,000 - 25,000 / year",
        must_have: &[
            "Simplified underwriting process.",
            "Option to customize sum assured.",
            "Paperless application process.",
            "Claim assistance 24/7 online.",
        ],
        good_to_have: &[
            "Hazardous occupation related death.",
            "Pre-existing critical illnesses (declaration required).",
        ],
        add_ons: &["Age: 18-58 years.", "Policy term up to 85 years."],
        rating: 4.3,
        reviews_count: 1800,
    },
    Seed {
        id: "term-maxshield",
        policy_type: PolicyType::Term,
        company: "MaxShield Life",
        name: "MaxShield Cover Plus",
        short_description: "High coverage term plan with return of premium at maturity.",
        price_range: "15,000 - 50,000 / year",
        must_have: &[
            "Return of premium paid if policyholder survives term.",
            "Enhanced cover for accidental death.",
            "Tax-free maturity benefit.",
            "Guaranteed additions for long-term policies.",
        ],
        good_to_have: &[
            "Death during military service (specific clauses).",
            "Participation in riots or civil commotion.",
        ],
        add_ons: &["Age: 25-60 years.", "Policy term: 15-30 years."],
        rating: 4.9,
        reviews_count: 1300,
    },
    Seed {
        id: "motor-driveprotect",
        policy_type: PolicyType::Motor,
        company: "DriveProtect Insurance",
        name: "DriveProtect Comprehensive",
        short_description: "All-round protection for your car against damage and theft.",
        price_range: "3,000 - 15,000 / year",
        must_have: &[
            "Damage to own vehicle covered.",
            "Third-party liability cover.",
            "Personal accident cover for owner-driver.",
            "24/7 roadside assistance.",
            "Cashless garage network.",
        ],
        good_to_have: &[
            "Wear and tear.",
            "Driving without a valid license.",
            "Damage due to war or nuclear risk.",
        ],
        add_ons: &[
            "Valid driving license required.",
            "Vehicle registration required.",
        ],
        rating: 4.3,
        reviews_count: 2500,
    },
    Seed {
        id: "motor-two-wheeler",
        policy_type: PolicyType::Motor,
        company: "SpeedSafe Insurance",
        name: "Two-Wheeler Protect",
        short_description: "Essential insurance for your motorcycle or scooter.",
        price_range: "1,500 - 5,000 / year",
        must_have: &[
            "Mandatory third-party liability cover.",
            "Own damage cover for accidents and natural calamities.",
            "Theft protection.",
            "Personal accident cover for owner-driver.",
        ],
        good_to_have: &[
            "Consequential loss.",
            "Mechanical or electrical breakdown.",
            "Driving under influence of alcohol/drugs.",
        ],
        add_ons: &["Valid driving license.", "Valid vehicle registration."],
        rating: 4.1,
        reviews_count: 1500,
    },
    Seed {
        id: "motor-roadguard",
        policy_type: PolicyType::Motor,
        company: "RoadGuard General",
        name: "RoadGuard Car Shield",
        short_description: "Extensive car insurance with zero depreciation add-on.",
        price_range: "4,000 - 18,000 / year",
        must_have: &[
            "Zero depreciation cover (bumper-to-bumper).",
            "No-claim bonus protection.",
            "Engine protector add-on.",
            "Key replacement cover.",
        ],
        good_to_have: &[
            "General aging and wear and tear.",
            "Electrical/mechanical breakdown.",
            "Driving for illegal purposes.",
        ],
        add_ons: &[
            "Private cars, up to 5 years old for zero depreciation.",
            "Valid vehicle documents.",
        ],
        rating: 4.6,
        reviews_count: 1900,
    },
    Seed {
        id: "motor-autocare",
        policy_type: PolicyType::Motor,
        company: "AutoCare Insurance",
        name: "AutoCare Supreme",
        short_description: "Premium motor insurance with personalized services.",
        price_range: "5,000 - 25,000 / year",
        must_have: &[
            "Customizable add-ons (tyre protect, return to invoice).",
            "Dedicated claim manager.",
            "Hybrid/electric vehicle specific coverage.",
            "Daily car allowance during repairs.",
        ],
        good_to_have: &[
            "Consequential damages.",
            "Loss due to war or invasion.",
            "Driving without a valid PUC certificate.",
        ],
        add_ons: &[
            "All types of registered private vehicles.",
            "Regular maintenance records.",
        ],
        rating: 4.7,
        reviews_count: 1100,
    },
    Seed {
        id: "motor-speedster",
        policy_type: PolicyType::Motor,
        company: "Speedster Insurance",
        name: "Speedster Bike Shield",
        short_description: "Specialized insurance for high-performance motorcycles.",
        price_range: "2,500 - 10,000 / year",
        must_have: &[
            "Protection against theft and total loss.",
            "Riding gear cover add-on.",
            "Pillion rider personal accident cover.",
            "Instant policy issuance online.",
        ],
        good_to_have: &[
            "Damage due to racing or rallies.",
            "Modifications not endorsed on RC.",
            "Overloading the vehicle.",
        ],
        add_ons: &["All registered two-wheelers.", "Compliance with RTO rules."],
        rating: 4.2,
        reviews_count: 850,
    },
];

/// The full bundled catalog, in display order.
pub fn fallback_policies() -> Vec<Policy> {
    SEEDS.iter().map(Seed::build).collect()
}

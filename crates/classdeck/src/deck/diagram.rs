//! Built-in diagrams for visualization slides, selected by the slide's
//! `visualization` key. Content is fixed; colors are `#rrggbb`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagram {
    MaturityModel,
    ImpactMatrix,
    AckuPipeline,
    AdoptionCurve,
    TrustEquation,
    Timeline,
    RiskFramework,
    RiskTiers,
    UseCaseTiers,
    CapabilityTiers,
}

impl Diagram {
    pub const ALL: [Diagram; 10] = [
        Self::MaturityModel,
        Self::ImpactMatrix,
        Self::AckuPipeline,
        Self::AdoptionCurve,
        Self::TrustEquation,
        Self::Timeline,
        Self::RiskFramework,
        Self::RiskTiers,
        Self::UseCaseTiers,
        Self::CapabilityTiers,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::MaturityModel => "maturity-model",
            Self::ImpactMatrix => "impact-matrix",
            Self::AckuPipeline => "acku-pipeline",
            Self::AdoptionCurve => "adoption-curve",
            Self::TrustEquation => "trust-equation",
            Self::Timeline => "timeline",
            Self::RiskFramework => "risk-framework",
            Self::RiskTiers => "risk-tiers",
            Self::UseCaseTiers => "use-case-tiers",
            Self::CapabilityTiers => "capability-tiers",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL.into_iter().find(|d| d.key() == key)
    }
}

pub struct MaturityLevel {
    pub name: &'static str,
    pub description: &'static str,
    pub detail: &'static str,
    pub color: &'static str,
    /// Opacity of the bar fill.
    pub fill: f32,
    /// Bar width as a fraction of the diagram width.
    pub width: f32,
}

/// Lowest level first; drawn bottom to top.
pub const MATURITY_LEVELS: [MaturityLevel; 5] = [
    MaturityLevel {
        name: "Unaware",
        description: "No formal AI discussion at leadership level",
        detail: "\"We have bigger priorities right now\"",
        color: "#3a3a4e",
        fill: 1.0,
        width: 1.0,
    },
    MaturityLevel {
        name: "Experimenting",
        description: "A few enthusiasts, no coordination",
        detail: "60-70% of manufacturing companies",
        color: "#00d4aa",
        fill: 0.2,
        width: 0.85,
    },
    MaturityLevel {
        name: "Implementing",
        description: "Dedicated budget, multiple use cases in production",
        detail: "15-20% of companies",
        color: "#00d4aa",
        fill: 0.4,
        width: 0.68,
    },
    MaturityLevel {
        name: "Scaling",
        description: "AI is part of how the business operates",
        detail: "Less than 5% of companies",
        color: "#00d4aa",
        fill: 0.6,
        width: 0.5,
    },
    MaturityLevel {
        name: "Transforming",
        description: "AI fundamentally changes how the business competes",
        detail: "Almost nobody is here yet",
        color: "#00d4aa",
        fill: 1.0,
        width: 0.35,
    },
];

pub struct Quadrant {
    pub label: &'static str,
    pub sublabel: &'static str,
    pub color: &'static str,
    pub items: &'static [&'static str],
}

/// Row-major: high impact on top, low effort on the left.
pub const QUADRANTS: [Quadrant; 4] = [
    Quadrant {
        label: "Quick Wins",
        sublabel: "Start Here",
        color: "#00d4aa",
        items: &[
            "Document summarization",
            "Meeting note automation",
            "Report generation",
            "Email drafting",
            "Quality data trends",
        ],
    },
    Quadrant {
        label: "Strategic Bets",
        sublabel: "Plan For These",
        color: "#6366f1",
        items: &[
            "Predictive quality",
            "Demand forecasting",
            "Regulatory doc generation",
            "Supply chain risk",
            "Digital twins",
        ],
    },
    Quadrant {
        label: "Time Fillers",
        sublabel: "Fine for Learning",
        color: "#71717a",
        items: &["Low-impact experiments", "Learning exercises"],
    },
    Quadrant {
        label: "Avoid",
        sublabel: "Don't Start Here",
        color: "#ef4444",
        items: &[
            "Custom models when off-the-shelf works",
            "AI for AI's sake",
            "Replacing human judgment in regulated decisions",
        ],
    },
];

pub struct Phase {
    pub name: &'static str,
    pub timeline: &'static str,
    pub color: &'static str,
    pub outputs: &'static str,
    pub items: &'static [&'static str],
}

pub const ACKU_PHASES: [Phase; 4] = [
    Phase {
        name: "LEARN",
        timeline: "Weeks 1-4",
        color: "#00d4aa",
        outputs: "Current-state assessment everyone agrees on",
        items: &[
            "Assess current state honestly",
            "Interview stakeholders: biggest time sinks?",
            "Catalog data assets & infrastructure",
            "Identify internal champions",
            "Benchmark against peers",
        ],
    },
    Phase {
        name: "PLAN",
        timeline: "Weeks 5-8",
        color: "#00c4ba",
        outputs: "Prioritized roadmap your CFO will approve",
        items: &[
            "Prioritize use cases (impact vs feasibility)",
            "Build governance framework",
            "Define business success metrics",
            "Create talent development plan",
            "Double your timeline estimate",
        ],
    },
    Phase {
        name: "BUILD",
        timeline: "Months 3-6",
        color: "#6366f1",
        outputs: "One deployed use case with measurable impact",
        items: &[
            "Start with ONE use case",
            "Deploy to 20-50 person pilot",
            "Change management from day one",
            "Measure adoption weekly",
            "Document everything",
        ],
    },
    Phase {
        name: "SCALE",
        timeline: "Months 6-18",
        color: "#818cf8",
        outputs: "Self-sustaining AI program",
        items: &[
            "Use pilot data to expand",
            "Roll out to more functions & sites",
            "Formalize training programs",
            "Mature governance as you grow",
            "Add use cases based on demand",
        ],
    },
];

pub struct Segment {
    pub label: &'static str,
    pub percentage: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

pub const ADOPTION_SEGMENTS: [Segment; 4] = [
    Segment {
        label: "Champions",
        percentage: "10-15%",
        description: "Adopt immediately. Find and empower them.",
        color: "#00d4aa",
    },
    Segment {
        label: "Early Majority",
        percentage: "60-70%",
        description: "Adopt when they see colleagues succeeding. Need social proof.",
        color: "#00c4ba",
    },
    Segment {
        label: "Late Majority",
        percentage: "15-20%",
        description: "Resist until it's the default. Don't fight them - build momentum.",
        color: "#00a4d4",
    },
    Segment {
        label: "Holdouts",
        percentage: "~5%",
        description: "Will never adopt. Don't optimize for them.",
        color: "#787888",
    },
];

pub struct TrustFactor {
    pub name: &'static str,
    pub description: &'static str,
    pub example: &'static str,
    pub color: &'static str,
}

pub const TRUST_FACTORS: [TrustFactor; 3] = [
    TrustFactor {
        name: "Transparency",
        description: "People understand what AI is doing and why. The reasoning, not the mathematics.",
        example: "\"This tool recommended reducing safety stock by 15% because demand variability decreased over 6 months.\"",
        color: "#00d4aa",
    },
    TrustFactor {
        name: "Consistency",
        description: "Tools work the same way every time. Same question, same quality answer.",
        example: "This is a product quality issue, not an AI issue.",
        color: "#00c4ba",
    },
    TrustFactor {
        name: "Competence",
        description: "Tools are good enough. If wrong 20% of the time, trust evaporates.",
        example: "Get baseline quality right before you scale.",
        color: "#00a4d4",
    },
];

pub const TRUST_DENOMINATOR: &str = "Self-Interest";
pub const TRUST_DENOMINATOR_NOTE: &str =
    "If people believe AI exists to cut headcount, trust is zero regardless of everything else.";

pub struct Milestone {
    pub period: &'static str,
    pub phase: &'static str,
    pub title: &'static str,
    pub metric: &'static str,
    pub items: &'static [&'static str],
    pub color: &'static str,
}

pub const MILESTONES: [Milestone; 5] = [
    Milestone {
        period: "Month 0-3",
        phase: "LEARN",
        title: "Foundation",
        metric: "40+ interviews",
        items: &[
            "Assessed current state",
            "Identified top pain points",
            "Built core team",
            "Established governance",
        ],
        color: "#00d4aa",
    },
    Milestone {
        period: "Month 3-6",
        phase: "BUILD",
        title: "First Use Case",
        metric: "65% adoption in week 1",
        items: &[
            "Piloted with 25 quality engineers",
            "30-minute training sessions",
            "4 hours saved per user per week",
        ],
        color: "#00c4ba",
    },
    Milestone {
        period: "Month 6-9",
        phase: "EXPAND",
        title: "Multi-Function",
        metric: "5 new functions",
        items: &[
            "Supply chain, regulatory, R&D, marketing, engineering",
            "Peer champions in each",
            "Monthly AI Office Hours",
        ],
        color: "#00b4ca",
    },
    Milestone {
        period: "Month 9-12",
        phase: "SCALE",
        title: "All Sites",
        metric: "500 active users",
        items: &[
            "All NA manufacturing sites",
            "Formal training program",
            "AI governance council",
            "Published AI use policy",
        ],
        color: "#00a4d4",
    },
    Milestone {
        period: "Month 12-18",
        phase: "SUSTAIN",
        title: "Organic Growth",
        metric: "1,000+ engaged users",
        items: &[
            "Organic word-of-mouth growth",
            "Internal community of practice",
            "Systematic business impact measurement",
        ],
        color: "#0094e4",
    },
];

pub struct RiskCategory {
    pub category: &'static str,
    pub color: &'static str,
    pub risks: &'static [&'static str],
    pub prevention: &'static str,
}

pub const RISK_CATEGORIES: [RiskCategory; 5] = [
    RiskCategory {
        category: "Data Privacy & Security",
        color: "#00d4aa",
        risks: &[
            "Confidential data in public AI tools",
            "Customer data used without consent",
            "Cross-border data transfer issues",
        ],
        prevention: "Clear data classification, approved tool list, DLP controls, regular audits",
    },
    RiskCategory {
        category: "Accuracy & Reliability",
        color: "#22d3ee",
        risks: &[
            "AI hallucinations",
            "Model degradation over time",
            "Over-reliance without verification",
        ],
        prevention: "Human-in-the-loop for high-risk decisions, model monitoring, expert review policies",
    },
    RiskCategory {
        category: "Bias & Fairness",
        color: "#6366f1",
        risks: &[
            "Historical biases in training data",
            "Discriminatory outcomes",
            "Lack of diversity in development",
        ],
        prevention: "Bias testing before deployment, diverse review panels, regular fairness audits",
    },
    RiskCategory {
        category: "Regulatory & Compliance",
        color: "#818cf8",
        risks: &[
            "AI docs don't meet regulatory standards",
            "Audit trail gaps",
            "IP ownership issues",
        ],
        prevention: "Documentation requirements, audit trails for AI decisions, regulatory monitoring",
    },
    RiskCategory {
        category: "Organizational",
        color: "#a78bfa",
        risks: &[
            "Key person dependency",
            "Vendor lock-in",
            "Shadow AI",
            "Change fatigue",
        ],
        prevention: "Distributed ownership, multi-vendor strategy, discovery audits, phased rollout",
    },
];

pub const RISK_FRAMEWORK_HINT: &str = "Click any category to expand prevention strategies";

pub struct RiskTier {
    pub level: u8,
    pub name: &'static str,
    pub color: &'static str,
    pub description: &'static str,
    pub approval: &'static str,
    pub review: &'static str,
    pub turnaround: &'static str,
}

pub const RISK_TIERS: [RiskTier; 3] = [
    RiskTier {
        level: 1,
        name: "Low Risk",
        color: "#00d4aa",
        description: "Internal productivity tools, no customer data, no regulated decisions",
        approval: "Department Manager",
        review: "Annual",
        turnaround: "48-hour fast track",
    },
    RiskTier {
        level: 2,
        name: "Medium Risk",
        color: "#d4a400",
        description: "Tools touching customer data, influencing business decisions, or generating external content",
        approval: "AI Governance Council",
        review: "Quarterly",
        turnaround: "1-2 weeks",
    },
    RiskTier {
        level: 3,
        name: "High Risk",
        color: "#d44a00",
        description: "Tools affecting product quality, regulatory compliance, or safety",
        approval: "AI Governance Council + Legal + Quality",
        review: "Monthly + event-driven",
        turnaround: "2 weeks maximum",
    },
];

pub const RISK_TIERS_PRINCIPLE: &str =
    "Key principle: Make compliance easy. If approval takes 6 weeks, people go around it.";

pub struct UseCaseTier {
    pub tier: &'static str,
    pub label: &'static str,
    pub sublabel: &'static str,
    pub color: &'static str,
    pub items: &'static [&'static str],
}

pub const USE_CASE_TIERS: [UseCaseTier; 3] = [
    UseCaseTier {
        tier: "Tier 1",
        label: "Start Here",
        sublabel: "High Impact, High Feasibility",
        color: "#00d4aa",
        items: &[
            "Document summarization & drafting (SOPs, batch records)",
            "Quality complaint trend analysis",
            "Meeting & communication automation",
            "Inventory optimization recommendations",
        ],
    },
    UseCaseTier {
        tier: "Tier 2",
        label: "Plan For Next",
        sublabel: "High Impact, Moderate Feasibility",
        color: "#00a4d4",
        items: &[
            "Predictive quality analytics",
            "Supplier risk assessment",
            "Demand planning augmentation",
            "Automated deviation investigation support",
        ],
    },
    UseCaseTier {
        tier: "Tier 3",
        label: "Future State",
        sublabel: "High Impact, Lower Feasibility",
        color: "#b39f87",
        items: &[
            "Real-time process optimization",
            "Computer vision for inspection",
            "Digital twins",
            "Autonomous scheduling",
        ],
    },
];

pub const USE_CASE_SCORE: &str = "Score: Impact (1-5) x Feasibility (1-5) = Priority";
pub const USE_CASE_THRESHOLDS: &str = "Above 15 = shortlist. Above 20 = start here.";

pub struct CapabilityTier {
    pub name: &'static str,
    pub percentage: &'static str,
    pub description: &'static str,
    pub color: &'static str,
    pub training: &'static str,
    pub skills: &'static [&'static str],
    /// Width in the pyramid, as a fraction of the diagram width.
    pub width: f32,
}

/// Broadest tier first; the pyramid draws them in reverse.
pub const CAPABILITY_TIERS: [CapabilityTier; 3] = [
    CapabilityTier {
        name: "AI Users",
        percentage: "80%",
        description: "of your workforce, eventually",
        color: "#00d4aa",
        training: "4-8 hours + ongoing support",
        skills: &[
            "Use AI tools built for them",
            "Understand basic concepts",
            "Evaluate AI outputs critically",
        ],
        width: 1.0,
    },
    CapabilityTier {
        name: "Power Users",
        percentage: "15%",
        description: "of your workforce",
        color: "#00a4d4",
        training: "20-40 hours, hands-on workshops",
        skills: &[
            "Customize AI tools for their function",
            "Build simple automations",
            "Train and support Tier 1",
        ],
        width: 0.75,
    },
    CapabilityTier {
        name: "AI Builders",
        percentage: "5%",
        description: "of your workforce",
        color: "#0094e4",
        training: "Formal programs, certifications",
        skills: &[
            "Develop and maintain AI solutions",
            "Integrate AI with existing systems",
            "Evaluate vendors and tools",
        ],
        width: 0.5,
    },
];

/// Total rows across the impact matrix quadrants.
pub fn quadrant_item_count() -> usize {
    QUADRANTS.iter().map(|q| q.items.len()).sum()
}

pub fn use_case_item_count() -> usize {
    USE_CASE_TIERS.iter().map(|t| t.items.len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::parse_hex;

    #[test]
    fn test_keys_round_trip() {
        for diagram in Diagram::ALL {
            assert_eq!(Diagram::from_key(diagram.key()), Some(diagram));
        }
        assert_eq!(Diagram::from_key(" timeline "), Some(Diagram::Timeline));
        assert_eq!(Diagram::from_key("org-chart"), None);
    }

    #[test]
    fn test_every_color_parses() {
        let colors = MATURITY_LEVELS
            .iter()
            .map(|l| l.color)
            .chain(QUADRANTS.iter().map(|q| q.color))
            .chain(ACKU_PHASES.iter().map(|p| p.color))
            .chain(ADOPTION_SEGMENTS.iter().map(|s| s.color))
            .chain(TRUST_FACTORS.iter().map(|f| f.color))
            .chain(MILESTONES.iter().map(|m| m.color))
            .chain(RISK_CATEGORIES.iter().map(|r| r.color))
            .chain(RISK_TIERS.iter().map(|t| t.color))
            .chain(USE_CASE_TIERS.iter().map(|t| t.color))
            .chain(CAPABILITY_TIERS.iter().map(|t| t.color));
        for color in colors {
            assert!(parse_hex(color).is_some(), "{color}");
        }
    }

    #[test]
    fn test_maturity_bars_narrow_upwards() {
        let widths: Vec<f32> = MATURITY_LEVELS.iter().map(|l| l.width).collect();
        assert!(widths.windows(2).all(|w| w[0] > w[1]), "{widths:?}");
    }

    #[test]
    fn test_item_counts() {
        assert_eq!(quadrant_item_count(), 15);
        assert_eq!(use_case_item_count(), 12);
    }
}

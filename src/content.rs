//! Fixed copy rendered by the landing page sections.

use crate::components::icon::Icon;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ServiceOffering {
    pub title: &'static str,
    pub icon: Icon,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProcessStep {
    pub title: &'static str,
    pub icon: Icon,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeatureHighlight {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// In-page anchor link.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactDetail {
    pub icon: Icon,
    pub text: &'static str,
}

pub const SERVICES: [ServiceOffering; 3] = [
    ServiceOffering {
        title: "Visa Renewals",
        icon: Icon::Users,
        description: "Automated visa tracking and renewal management for your entire team.",
    },
    ServiceOffering {
        title: "Trade License Management",
        icon: Icon::Building,
        description: "Proactive license monitoring and hassle-free renewals across all UAE jurisdictions.",
    },
    ServiceOffering {
        title: "Corporate Compliance",
        icon: Icon::Shield,
        description: "Stay compliant with automated document tracking and timely alerts.",
    },
];

pub const STEPS: [ProcessStep; 4] = [
    ProcessStep {
        title: "Submit Details",
        icon: Icon::Send,
        description: "Share your business information and compliance needs",
    },
    ProcessStep {
        title: "Digital Upload",
        icon: Icon::FileCheck,
        description: "Upload documents through our secure platform",
    },
    ProcessStep {
        title: "Smart Processing",
        icon: Icon::CheckCircle,
        description: "Our system processes and validates your documents",
    },
    ProcessStep {
        title: "Auto Renewals",
        icon: Icon::Clock,
        description: "Receive alerts and handle renewals digitally",
    },
];

pub const FEATURES: [FeatureHighlight; 4] = [
    FeatureHighlight {
        icon: Icon::Briefcase,
        title: "Business Setup",
        description: "Streamlined company formation and licensing",
    },
    FeatureHighlight {
        icon: Icon::FileText,
        title: "Document Management",
        description: "Centralized storage and tracking",
    },
    FeatureHighlight {
        icon: Icon::BarChart,
        title: "Analytics Dashboard",
        description: "Real-time compliance monitoring",
    },
    FeatureHighlight {
        icon: Icon::CircleDot,
        title: "Automated Alerts",
        description: "Never miss a renewal deadline",
    },
];

pub const FAQS: [FaqEntry; 4] = [
    FaqEntry {
        question: "How long does the visa renewal process take?",
        answer: "Typically, visa renewals are processed within 3-5 working days, depending on the type of visa and documentation completeness.",
    },
    FaqEntry {
        question: "What documents do I need for trade license renewal?",
        answer: "Required documents include your existing trade license, passport copies of shareholders, tenancy contract, and other specific documents based on your business activity.",
    },
    FaqEntry {
        question: "Can Doculab handle multiple business locations?",
        answer: "Yes, we can manage compliance and documentation for businesses with multiple branches or locations across the UAE.",
    },
    FaqEntry {
        question: "What sets Doculab apart from traditional PRO services?",
        answer: "Unlike typing centers, we're fully digital and proactive. Our platform automates document tracking, sends renewal reminders, and provides real-time status updates, all without you leaving your office.",
    },
];

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { label: "Home", href: "#home" },
    NavLink { label: "Services", href: "#services" },
    NavLink { label: "How It Works", href: "#how-it-works" },
    NavLink { label: "About Us", href: "#about" },
    NavLink { label: "FAQs", href: "#faqs" },
];

pub const CONTACT_LINK: NavLink = NavLink { label: "Contact Us", href: "#contact" };

pub const FOOTER_LINKS: [NavLink; 4] = [
    NavLink { label: "Services", href: "#services" },
    NavLink { label: "How It Works", href: "#how-it-works" },
    NavLink { label: "About Us", href: "#about" },
    NavLink { label: "Contact", href: "#contact" },
];

pub const INQUIRY_TYPES: [&str; 4] = [
    "Visa Services",
    "Trade License",
    "Corporate Compliance",
    "Other",
];

pub const CONTACT_DETAILS: [ContactDetail; 2] = [
    ContactDetail { icon: Icon::Building, text: crate::config::OFFICE_LOCATION },
    ContactDetail { icon: Icon::Mail, text: crate::config::CONTACT_EMAIL },
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn list_sizes_match_the_page_layout() {
        assert_eq!(SERVICES.len(), 3);
        assert_eq!(STEPS.len(), 4);
        assert_eq!(FEATURES.len(), 4);
        assert_eq!(FAQS.len(), 4);
        assert_eq!(INQUIRY_TYPES.len(), 4);
        assert_eq!(NAV_LINKS.len(), 5);
    }

    #[test]
    fn anchors_point_at_section_ids() {
        let sections = ["#home", "#services", "#how-it-works", "#about", "#faqs", "#contact"];
        for link in NAV_LINKS.iter().chain(FOOTER_LINKS.iter()).chain([&CONTACT_LINK]) {
            assert!(sections.contains(&link.href), "dangling anchor {}", link.href);
        }
    }

    #[test]
    fn no_blank_copy() {
        for faq in FAQS {
            assert!(!faq.question.is_empty() && !faq.answer.is_empty());
        }
        for service in SERVICES {
            assert!(!service.title.is_empty() && !service.description.is_empty());
        }
    }
}

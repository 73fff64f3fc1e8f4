//! Built-in page content.
//!
//! The informational sections are static data: the shell renders them,
//! nothing computes over them. Kept as typed values so every shell (CLI
//! tables, GUI cards) draws from the same source.

use serde::Serialize;

/// One dated entry on the event timeline.
#[derive(Debug, Clone, Serialize)]
pub struct Milestone {
    pub date: &'static str,
    pub title: &'static str,
}

/// One problem statement card.
#[derive(Debug, Clone, Serialize)]
pub struct Problem {
    pub title: &'static str,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
}

/// One prize tier.
#[derive(Debug, Clone, Serialize)]
pub struct Prize {
    pub place: &'static str,
    pub amount: &'static str,
    pub extras: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub fn milestones() -> Vec<Milestone> {
    vec![
        Milestone { date: "Aug 25", title: "Problem Statements Released" },
        Milestone { date: "Sep 1", title: "Info Session + Q&A" },
        Milestone { date: "Sep 5", title: "Team Registration Closes (11:59 PM IST)" },
        Milestone { date: "Sep 10", title: "Mentor Hours Booking Opens" },
        Milestone { date: "Sep 13", title: "Check-in & Environment Setup Brief" },
        Milestone { date: "Sep 14", title: "Hackathon Day (Opening Ceremony, Coding Starts)" },
        Milestone { date: "Sep 15", title: "Submissions, Presentations, Judging & Results" },
    ]
}

pub fn problems() -> Vec<Problem> {
    vec![
        Problem {
            title: "Campus Ops Agent",
            summary: "Handle student requests end-to-end with triage, routing, and follow-ups.",
            tags: &["Forms/Sheets", "Email", "WhatsApp"],
        },
        Problem {
            title: "Research Assistant Agent",
            summary: "Multi-agent pipeline for literature search, summarization, and experiment design.",
            tags: &["Briefs", "Citations", "Prompts"],
        },
        Problem {
            title: "Smart Classroom Scheduler",
            summary: "Auto-generate schedules, resolve clashes, and notify stakeholders.",
            tags: &["Constraints", "Rooms", "Notifications"],
        },
        Problem {
            title: "Vendor Compliance Checker",
            summary: "Parse PDFs/contracts to flag gaps, deadlines, and risks with suggestions.",
            tags: &["PDF", "NLP", "Compliance"],
        },
        Problem {
            title: "Social Impact Bot",
            summary: "Match students with NGOs/causes, schedule volunteering, and report impact.",
            tags: &["APIs", "Matching", "Reports"],
        },
    ]
}

pub fn prizes() -> Vec<Prize> {
    vec![
        Prize {
            place: "Winner",
            amount: "₹25,000",
            extras: "Certificate + Swag + Incubation Fast-Track",
        },
        Prize {
            place: "1st Runner-up",
            amount: "₹15,000",
            extras: "Certificate + Swag",
        },
        Prize {
            place: "2nd Runner-up",
            amount: "₹10,000",
            extras: "Certificate",
        },
        Prize {
            place: "Special Awards",
            amount: "₹2,000 each",
            extras: "Architecture • UI/UX • Impact • Open-Source",
        },
    ]
}

pub fn rules() -> Vec<&'static str> {
    vec![
        "Team size: 1-4",
        "Original work only; open-source allowed with attribution",
        "Code submitted via GitHub link + short demo video",
        "Use of AI tools permitted; disclose model(s) & datasets",
        "Respect code of conduct; plagiarism/disallowed content will be disqualified",
        "Judging: innovation(25%), feasibility(25%), technical depth(25%), impact(25%)",
    ]
}

pub fn faqs() -> Vec<Faq> {
    vec![
        Faq { question: "Who can participate?", answer: "Open to all VIT Bhopal students." },
        Faq { question: "Team size?", answer: "1-4 members per team." },
        Faq { question: "Are AI tools allowed?", answer: "Yes. Disclose model(s) and datasets used." },
        Faq { question: "Submission format?", answer: "GitHub link + short demo video." },
        Faq {
            question: "What are judging criteria?",
            answer: "Innovation, feasibility, technical depth, and impact (25% each).",
        },
        Faq { question: "Will there be mentors?", answer: "Yes. Mentor hours open on Sep 10." },
        Faq { question: "What to bring?", answer: "Student ID, laptop, chargers, and enthusiasm!" },
        Faq { question: "Is there food?", answer: "Details will be announced in the briefing." },
    ]
}

/// Marquee strip lines under the hero.
pub fn taglines() -> Vec<&'static str> {
    vec![
        "24-hour build • Team size 1-4 • Open to all VIT Bhopal students",
        "Mentorship • Swags • Networking • PoC-ready projects",
        "Agentic AI • Automation • Real-world impact",
    ]
}

/// Tips shown by the floating help widget.
pub fn assistant_tips() -> &'static str {
    indoc::indoc! {"
        Check Timeline for key dates.
        Use Resources for agent frameworks.
        Follow Rules to avoid disqualification.
    "}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_complete() {
        assert_eq!(milestones().len(), 7);
        assert_eq!(problems().len(), 5);
        assert_eq!(prizes().len(), 4);
        assert_eq!(rules().len(), 6);
        assert_eq!(faqs().len(), 8);
        assert_eq!(taglines().len(), 3);
    }

    #[test]
    fn problems_carry_tags() {
        assert!(problems().iter().all(|p| !p.tags.is_empty()));
    }

    #[test]
    fn content_serializes() {
        let json = serde_json::to_value(faqs()).unwrap();
        assert_eq!(json[0]["question"], "Who can participate?");
    }
}

use helpdesk_triage_core::{triage_ticket, Priority, TicketClassifier};

#[test]
fn account_keywords_are_case_insensitive() {
    for keyword in ["password", "login", "locked", "mfa", "reset"] {
        let upper = format!("My {} is broken", keyword.to_uppercase());
        assert_eq!(triage_ticket(&upper).category, "Account / Access", "{upper}");
    }
}

#[test]
fn account_takes_precedence_over_network() {
    let result = triage_ticket("password reset over vpn");
    assert_eq!(result.category, "Account / Access");
}

#[test]
fn each_category_has_its_recommendation() {
    let cases = [
        (
            "wifi keeps dropping",
            "Network",
            "Check connectivity, VPN/Wi-Fi status, confirm outage scope, escalate if widespread.",
        ),
        (
            "outlook will not open",
            "Software / Application",
            "Reproduce issue, check updates, verify permissions, reinstall if needed.",
        ),
        (
            "mouse is sticky",
            "Hardware",
            "Check power/cables, run basic diagnostics, swap peripherals if available.",
        ),
        (
            "question about the coffee machine",
            "General Support",
            "Gather details (who/what/when), reproduce issue, document steps, route appropriately.",
        ),
    ];

    for (text, category, recommendation) in cases {
        let result = triage_ticket(text);
        assert_eq!(result.category, category, "{text}");
        assert_eq!(result.recommendation, recommendation, "{text}");
    }
}

#[test]
fn substring_matches_inside_words() {
    // "dns" inside a longer token still counts.
    assert_eq!(triage_ticket("the xdnsx record").category, "Network");
}

#[test]
fn priority_resolution() {
    assert_eq!(triage_ticket("outage hitting all users").priority, Priority::Critical);
    assert_eq!(triage_ticket("outage").priority, Priority::High);
    assert_eq!(triage_ticket("minor").priority, Priority::Low);
    assert_eq!(triage_ticket("the toner is faded").priority, Priority::Medium);
}

#[test]
fn high_impact_without_urgency_is_medium() {
    assert_eq!(
        triage_ticket("multiple people asked about the wiki").priority,
        Priority::Medium
    );
}

#[test]
fn empty_input_is_general_medium() {
    let result = triage_ticket("");
    assert_eq!(result.category, "General Support");
    assert_eq!(result.priority.label(), "P3 (Medium)");
}

#[test]
fn classification_is_idempotent() {
    let classifier = TicketClassifier::builtin();
    let text = "Printer offline, cannot print invoices";
    assert_eq!(classifier.classify(text), classifier.classify(text));
    assert_eq!(triage_ticket(text), classifier.classify(text));
}

#[test]
fn laptop_keyboard_not_urgent() {
    let result = triage_ticket("My laptop keyboard is not urgent, minor issue");
    assert_eq!(result.category, "Hardware");
    assert_eq!(result.priority.label(), "P4 (Low)");
}

#[test]
fn vpn_down_for_everyone() {
    let result = triage_ticket("VPN is down for everyone, urgent!!");
    assert_eq!(result.category, "Network");
    assert_eq!(result.priority.label(), "P1 (Critical)");
}

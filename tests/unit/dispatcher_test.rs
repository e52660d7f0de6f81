//! Dispatcher behavior with recording transports

use perfgate::core::models::{Action, ActionKind, Enforcement, MetricSnapshot, Operator, Rule};
use perfgate::core::services::{evaluate, Dispatcher};
use perfgate::output::EvaluationReport;

use crate::common::{RecordingLog, StubMailer, StubWebhook};

fn failing_evaluation() -> perfgate::core::models::Evaluation {
    let metrics: MetricSnapshot = [("lcp", 2600.0), ("cls", 0.3)].into_iter().collect();
    let rules = vec![
        Rule::new("lcp", 2500.0, Operator::Gt, Enforcement::Hard),
        Rule::new("cls", 0.1, Operator::Gt, Enforcement::Soft),
    ];
    evaluate(&metrics, &rules)
}

#[test]
fn no_actions_fire_on_a_passing_evaluation() {
    let metrics: MetricSnapshot = [("lcp", 1000.0)].into_iter().collect();
    let rules = vec![Rule::new("lcp", 2500.0, Operator::Gt, Enforcement::Hard)];
    let evaluation = evaluate(&metrics, &rules);

    let log = RecordingLog::default();
    let mail = StubMailer::accepting();
    let webhook = StubWebhook::replying(200);
    let dispatcher = Dispatcher::new(&log, &mail, &webhook);

    let outcomes = dispatcher.execute_actions(
        &evaluation,
        &[
            Action::Log,
            Action::Email { recipient: Some("ops@example.com".into()), subject: None },
            Action::Webhook { url: Some("https://hooks.example.com".into()) },
        ],
    );

    assert!(outcomes.is_empty());
    assert!(log.entries.lock().unwrap().is_empty());
    assert!(mail.sent.lock().unwrap().is_empty());
    assert!(webhook.calls.lock().unwrap().is_empty());
}

#[test]
fn outcomes_preserve_action_order() {
    let log = RecordingLog::default();
    let mail = StubMailer::accepting();
    let webhook = StubWebhook::replying(200);
    let dispatcher = Dispatcher::new(&log, &mail, &webhook);

    let outcomes = dispatcher.execute_actions(
        &failing_evaluation(),
        &[
            Action::Webhook { url: Some("https://hooks.example.com".into()) },
            Action::Log,
            Action::Email { recipient: Some("ops@example.com".into()), subject: None },
        ],
    );

    let kinds: Vec<ActionKind> = outcomes.iter().map(|o| o.kind).collect();
    assert_eq!(kinds, vec![ActionKind::Webhook, ActionKind::Log, ActionKind::Email]);
    assert!(outcomes.iter().all(|o| o.success));
}

#[test]
fn webhook_posts_the_serialized_evaluation() {
    let log = RecordingLog::default();
    let mail = StubMailer::accepting();
    let webhook = StubWebhook::replying(200);
    let dispatcher = Dispatcher::new(&log, &mail, &webhook);

    let evaluation = failing_evaluation();
    dispatcher.execute_actions(
        &evaluation,
        &[Action::Webhook { url: Some("https://hooks.example.com".into()) }],
    );

    let calls = webhook.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "https://hooks.example.com");
    assert_eq!(calls[0].1, serde_json::to_value(&evaluation).unwrap());
}

#[test]
fn rejected_mail_yields_a_failed_outcome() {
    let log = RecordingLog::default();
    let mail = StubMailer::rejecting();
    let webhook = StubWebhook::replying(200);
    let dispatcher = Dispatcher::new(&log, &mail, &webhook);

    let outcomes = dispatcher.execute_actions(
        &failing_evaluation(),
        &[Action::Email { recipient: Some("ops@example.com".into()), subject: None }],
    );

    assert_eq!(outcomes.len(), 1);
    assert!(!outcomes[0].success);
    // The send was attempted; rejection came from the collaborator.
    assert_eq!(mail.sent.lock().unwrap().len(), 1);
}

#[test]
fn email_body_lists_only_violations() {
    let log = RecordingLog::default();
    let mail = StubMailer::accepting();
    let webhook = StubWebhook::replying(200);
    let dispatcher = Dispatcher::new(&log, &mail, &webhook);

    dispatcher.execute_actions(
        &failing_evaluation(),
        &[Action::Email {
            recipient: Some("ops@example.com".into()),
            subject: Some("perf gate".into()),
        }],
    );

    let sent = mail.sent.lock().unwrap();
    let (recipient, subject, body) = &sent[0];
    assert_eq!(recipient, "ops@example.com");
    assert_eq!(subject, "perf gate");
    assert!(body.contains("- lcp: Largest Contentful Paint is greater than"));
    // The cls warning is soft and must not appear.
    assert!(!body.contains("cls"));
}

#[test]
fn report_exposes_action_results_at_the_boundary() {
    let log = RecordingLog::default();
    let mail = StubMailer::accepting();
    let webhook = StubWebhook::replying(404);
    let dispatcher = Dispatcher::new(&log, &mail, &webhook);

    let evaluation = failing_evaluation();
    let outcomes = dispatcher.execute_actions(
        &evaluation,
        &[Action::Log, Action::Webhook { url: Some("https://hooks.example.com".into()) }],
    );

    let report = EvaluationReport::new(evaluation, outcomes);
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["passed"], false);
    assert_eq!(value["action_results"][0]["type"], "log");
    assert_eq!(value["action_results"][0]["success"], true);
    assert_eq!(value["action_results"][1]["type"], "webhook");
    assert_eq!(value["action_results"][1]["success"], false);
    assert!(value["generated_at"].is_string());
}

// Rust guideline compliant 2026-10-17

//! Tests for the token creation service against fake capabilities.

use aclctl_app::{build_new_token, create_token, AppError, CreateTokenOptions, ErrorCode};
use aclctl_core::{
    AclToken, BoxError, Error as CoreError, IdLister, NewToken, PolicyLink, ResourceKind,
    TokenCreator,
};
use std::cell::{Cell, RefCell};

/// Fake remote system with a fixed policy listing.
struct FakeAgent {
    policy_ids: Vec<String>,
    list_calls: Cell<usize>,
    created: RefCell<Vec<NewToken>>,
    create_error: Option<String>,
}

impl FakeAgent {
    fn new(policy_ids: &[&str]) -> Self {
        Self {
            policy_ids: policy_ids.iter().map(|id| id.to_string()).collect(),
            list_calls: Cell::new(0),
            created: RefCell::new(Vec::new()),
            create_error: None,
        }
    }
}

impl IdLister for FakeAgent {
    fn list_ids(&self, kind: ResourceKind) -> Result<Vec<String>, BoxError> {
        assert_eq!(kind, ResourceKind::Policy);
        self.list_calls.set(self.list_calls.get() + 1);
        Ok(self.policy_ids.clone())
    }
}

impl TokenCreator for FakeAgent {
    fn create_token(&self, token: &NewToken) -> Result<AclToken, BoxError> {
        if let Some(message) = &self.create_error {
            return Err(message.clone().into());
        }
        self.created.borrow_mut().push(token.clone());
        Ok(AclToken {
            accessor_id: "6a1253d2-1785-24fd-91c2-f8e78c745511".to_string(),
            secret_id: "45a3bd52-07c7-47a4-52fd-0745e0cfe967".to_string(),
            description: token.description.clone(),
            policies: token.policies.clone(),
            local: token.local,
            ..AclToken::default()
        })
    }
}

const REPLICATION: &str = "b52fc3de-5111-4c1e-8c5a-000000000001";
const NODE_READ: &str = "165d4317-e379-f732-ce70-86278c4558f7";

#[test]
fn test_create_without_policies_is_rejected() {
    let agent = FakeAgent::new(&[REPLICATION]);
    let options = CreateTokenOptions {
        description: "no policies".to_string(),
        ..CreateTokenOptions::default()
    };

    let err = create_token(&options, &agent).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ValidationError);
    assert!(err.to_string().contains("-policy-name or -policy-id"));
    assert_eq!(agent.list_calls.get(), 0);
    assert!(agent.created.borrow().is_empty());
}

#[test]
fn test_names_only_skip_listing() {
    let agent = FakeAgent::new(&[REPLICATION]);
    let options = CreateTokenOptions {
        policy_names: vec!["acl-replication".to_string()],
        ..CreateTokenOptions::default()
    };

    let token = create_token(&options, &agent).unwrap();
    assert_eq!(token.policies, vec![PolicyLink::by_name("acl-replication")]);
    assert_eq!(agent.list_calls.get(), 0);
}

#[test]
fn test_links_names_first_then_resolved_ids() {
    let agent = FakeAgent::new(&[REPLICATION, NODE_READ]);
    let options = CreateTokenOptions {
        description: "Replication token".to_string(),
        local: true,
        policy_ids: vec!["b52fc3de-5".to_string(), "165d".to_string()],
        policy_names: vec!["acl-replication".to_string()],
    };

    create_token(&options, &agent).unwrap();

    let created = agent.created.borrow();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].description, "Replication token");
    assert!(created[0].local);
    assert_eq!(
        created[0].policies,
        vec![
            PolicyLink::by_name("acl-replication"),
            PolicyLink::by_id(REPLICATION),
            PolicyLink::by_id(NODE_READ),
        ]
    );
}

#[test]
fn test_duplicate_links_pass_through() {
    let agent = FakeAgent::new(&[REPLICATION]);
    let options = CreateTokenOptions {
        policy_ids: vec!["b52f".to_string(), REPLICATION.to_string()],
        policy_names: vec!["acl-replication".to_string(), "acl-replication".to_string()],
        ..CreateTokenOptions::default()
    };

    let request = build_new_token(&options, &agent).unwrap();
    assert_eq!(request.policies.len(), 4);
    assert_eq!(request.policies[2], request.policies[3]);
}

#[test]
fn test_ambiguous_prefix_aborts_before_create() {
    let agent = FakeAgent::new(&[
        "b52fc3de-5111-4c1e-8c5a-000000000001",
        "b52fc3de-5222-4c1e-8c5a-000000000002",
    ]);
    let options = CreateTokenOptions {
        policy_ids: vec!["b52fc3de-5".to_string()],
        ..CreateTokenOptions::default()
    };

    let err = create_token(&options, &agent).unwrap_err();
    assert_eq!(err.code(), ErrorCode::AmbiguousPrefix);
    assert!(err.to_string().starts_with("Error resolving policy ID b52fc3de-5:"));
    assert!(agent.created.borrow().is_empty());

    let details = err.details().unwrap();
    assert_eq!(details["count"], 2);
}

#[test]
fn test_unknown_prefix_is_not_found() {
    let agent = FakeAgent::new(&[REPLICATION]);
    let options = CreateTokenOptions {
        policy_ids: vec!["zzzz".to_string()],
        ..CreateTokenOptions::default()
    };

    let err = create_token(&options, &agent).unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotFound);
    match err {
        AppError::PolicyResolution { prefix, source } => {
            assert_eq!(prefix, "zzzz");
            assert!(matches!(source, CoreError::NotFound { .. }));
        }
        other => panic!("expected resolution error, got {:?}", other),
    }
}

#[test]
fn test_create_failure_is_upstream() {
    let mut agent = FakeAgent::new(&[REPLICATION]);
    agent.create_error = Some("Unexpected response code: 403 (Permission denied)".to_string());
    let options = CreateTokenOptions {
        policy_names: vec!["acl-replication".to_string()],
        ..CreateTokenOptions::default()
    };

    let err = create_token(&options, &agent).unwrap_err();
    assert_eq!(err.code(), ErrorCode::UpstreamError);
    let msg = err.to_string();
    assert!(msg.starts_with("Failed to create new token:"));
    assert!(msg.contains("403"));
}

#[test]
fn test_listing_failure_is_upstream() {
    let lister = |_kind: ResourceKind| -> Result<Vec<String>, BoxError> {
        Err("Unexpected response code: 500 (rpc error)".into())
    };
    let options = CreateTokenOptions {
        policy_ids: vec!["b52f".to_string()],
        ..CreateTokenOptions::default()
    };

    let err = build_new_token(&options, &lister).unwrap_err();
    assert_eq!(err.code(), ErrorCode::UpstreamError);
    assert!(err.to_string().contains("rpc error"));
}

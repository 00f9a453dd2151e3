// ABOUTME: Test helper utilities for mocking Jira API responses and server
// ABOUTME: Provides mockito-based helpers for unit testing API interactions

use mockito::{Server, ServerGuard};
use serde_json::json;

pub async fn mock_server() -> ServerGuard {
    Server::new_async().await
}

pub fn search_response_body() -> serde_json::Value {
    json!({
        "startAt": 0,
        "maxResults": 50,
        "total": 2,
        "issues": [
            {
                "id": "10001",
                "key": "DEMO-1",
                "fields": {
                    "summary": "Fix login race condition",
                    "status": {
                        "id": "3",
                        "name": "In Progress",
                        "statusCategory": {
                            "id": 4,
                            "key": "indeterminate",
                            "name": "In Progress",
                            "colorName": "yellow"
                        }
                    },
                    "issuetype": {"id": "1", "name": "Bug"},
                    "components": [{"id": "100", "name": "auth"}],
                    "updated": "2024-01-16T14:45:00.000+0000"
                }
            },
            {
                "id": "10002",
                "key": "DEMO-2",
                "fields": {
                    "summary": "Implement OAuth flow",
                    "status": {
                        "id": "1",
                        "name": "Open",
                        "statusCategory": {
                            "id": 2,
                            "key": "new",
                            "name": "To Do",
                            "colorName": "blue-gray"
                        }
                    },
                    "issuetype": {"id": "2", "name": "Story"},
                    "components": [],
                    "updated": "2024-01-10T09:00:00.000+0000"
                }
            }
        ]
    })
}

pub fn empty_search_response_body() -> serde_json::Value {
    json!({
        "startAt": 0,
        "maxResults": 50,
        "total": 0,
        "issues": []
    })
}

pub fn issue_detail_body() -> serde_json::Value {
    json!({
        "id": "10001",
        "key": "DEMO-1",
        "fields": {
            "summary": "Fix login race condition",
            "description": "h1. Context\n\nUsers hit a race when logging in from *multiple* devices.",
            "status": {
                "id": "3",
                "name": "In Progress",
                "statusCategory": {
                    "id": 4,
                    "key": "indeterminate",
                    "name": "In Progress",
                    "colorName": "yellow"
                }
            },
            "issuetype": {"id": "1", "name": "Bug"},
            "priority": {"id": "2", "name": "High"},
            "labels": ["auth", "regression"],
            "components": [{"id": "100", "name": "auth"}],
            "created": "2024-01-15T10:30:00.000+0000",
            "updated": "2024-01-16T14:45:00.000+0000",
            "comment": {
                "comments": [
                    {
                        "id": "200",
                        "author": {"accountId": "u1", "displayName": "Alice"},
                        "body": "Reproduced on staging.",
                        "created": "2024-01-16T12:00:00.000+0000"
                    }
                ],
                "total": 1
            }
        }
    })
}

pub fn not_found_body() -> serde_json::Value {
    json!({
        "errorMessages": ["Issue does not exist or you do not have permission to see it."],
        "errors": {}
    })
}

pub fn projects_body() -> serde_json::Value {
    json!([
        {"id": "1000", "key": "DEMO", "name": "Demo Project"},
        {"id": "1001", "key": "OPS", "name": "Operations"}
    ])
}

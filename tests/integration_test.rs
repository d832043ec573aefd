use assert_cmd::Command;
use assert_cmd::cargo;
use mockito::Server;
use predicates::prelude::*;

const RELEASES_PATH: &str = "/repos/owner/repo/releases?per_page=100&page=1";

fn releases_body() -> &'static str {
    r#"[
        {
            "tag_name": "v2.0.0-rc1",
            "name": "Second",
            "published_at": "2023-03-15T09:00:00Z",
            "prerelease": true,
            "assets": [
                {"name": "tool-linux.tar.gz", "updated_at": "2023-03-16T10:00:00Z", "download_count": 3},
                {"name": "tool-macos.tar.gz", "updated_at": "2023-03-17T10:00:00Z", "download_count": 4}
            ]
        },
        {
            "tag_name": "v1",
            "name": "v1",
            "published_at": "2023-01-01T00:00:00Z",
            "prerelease": false,
            "assets": [
                {"name": "a.zip", "updated_at": "2023-01-02T00:00:00Z", "download_count": 5}
            ]
        }
    ]"#
}

fn ghstats(api_url: &str) -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("ghstats"));
    cmd.arg("--api-url").arg(api_url);
    cmd
}

#[test]
fn test_lists_all_releases() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", RELEASES_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(releases_body())
        .create();

    ghstats(&server.url())
        .arg("owner")
        .arg("repo")
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "Second [PRERELEASE] [03-15-2023]",
        ))
        .stdout(predicates::str::contains(
            "PUBLISH DATE | RELEASE TAG | FILE NAME | DOWNLOAD COUNT",
        ))
        .stdout(predicates::str::contains(
            "03-16-2023 | v2.0.0-rc1 | tool-linux.tar.gz | 3",
        ))
        .stdout(predicates::str::contains("01-02-2023 | v1 | a.zip | 5"))
        .stdout(predicates::str::ends_with("TOTAL DOWNLOAD COUNT: 12\n"));

    mock.assert();
}

#[test]
fn test_tag_filter_selects_one_release() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", RELEASES_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(releases_body())
        .create();

    ghstats(&server.url())
        .args(["owner", "repo", "--tag", "V1"])
        .assert()
        .success()
        .stdout(predicates::str::contains("01-02-2023 | v1 | a.zip | 5"))
        .stdout(predicates::str::contains("tool-linux").not())
        .stdout(predicates::str::ends_with("TOTAL DOWNLOAD COUNT: 5\n"));
}

#[test]
fn test_unmatched_tag_prints_only_total() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", RELEASES_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(releases_body())
        .create();

    let output = ghstats(&server.url())
        .args(["owner", "repo", "-t", "v9"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap().trim(),
        "TOTAL DOWNLOAD COUNT: 0"
    );
}

#[test]
fn test_missing_repo_name_makes_no_request() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", mockito::Matcher::Any)
        .expect(0)
        .create();

    ghstats(&server.url())
        .arg("owner")
        .assert()
        .success()
        .stdout(predicates::str::starts_with("One or more parser error:\n"))
        .stdout(predicates::str::contains("[MissingRequiredOptionError]"))
        .stdout(predicates::str::contains("REPO_NAME"))
        .stderr(predicates::str::contains("<REPO_NAME>"))
        .stderr(predicates::str::contains("Usage:"));

    mock.assert();
}

#[test]
fn test_unknown_repository_fails_loudly() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/repos/owner/missing/releases?per_page=100&page=1")
        .with_status(404)
        .with_body(r#"{"message": "Not Found"}"#)
        .expect(1)
        .create();

    ghstats(&server.url())
        .args(["owner", "missing"])
        .assert()
        .failure()
        .stdout(predicates::str::is_empty())
        .stderr(predicates::str::contains("owner/missing"))
        .stderr(predicates::str::contains("Not found"));

    mock.assert();
}

#[test]
fn test_help_mentions_tag_flag() {
    Command::new(cargo::cargo_bin!("ghstats"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("--tag"))
        .stdout(predicates::str::contains("--api-url").not());
}

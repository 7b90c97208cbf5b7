use super::*;

/// Tests splitting a client's issues into open and closed counts.
///
/// Expected: Ok((2, 2)) with RESOLVED and CLOSED counted as closed
#[tokio::test]
async fn counts_open_and_closed() -> Result<(), AppError> {
    let test = TestBuilder::new().with_issue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, client, reporter, _open) = factory::helpers::create_issue_with_dependencies(db).await?;

    for status in ["IN_REVIEW", "RESOLVED", "CLOSED"] {
        factory::issue::IssueFactory::new(db, client.id, reporter.id)
            .status(status)
            .build()
            .await?;
    }

    let other = factory::create_client(db, None).await?;
    factory::create_issue(db, other.id, reporter.id).await?;

    let counts = ClientRepository::new(db).count_issues(client.id).await?;

    assert_eq!(counts, (2, 2));

    Ok(())
}

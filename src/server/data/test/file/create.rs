use super::*;

/// Expected: Ok with all metadata stored
#[tokio::test]
async fn creates_file_record() -> Result<(), AppError> {
    let test = TestBuilder::new().with_issue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, _, reporter, issue) = factory::helpers::create_issue_with_dependencies(db).await?;

    let file = FileRepository::new(db)
        .create(CreateFileParam {
            issue_id: issue.id,
            uploader_id: reporter.id,
            name: "screenshot.png".to_string(),
            url: "https://files.example.com/abc/screenshot.png".to_string(),
            size: 20_480,
            content_type: "image/png".to_string(),
        })
        .await?;

    assert_eq!(file.name, "screenshot.png");
    assert_eq!(file.size, 20_480);
    assert_eq!(file.uploader_id, reporter.id);

    Ok(())
}

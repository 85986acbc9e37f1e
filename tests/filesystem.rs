mod common;

use std::sync::Arc;

use axum::http::Method;
use common::{closed_address, MockNameNode};
use webhdfs::{Configuration, FileSystem, FileType, Path, RemoteExceptionKind, WebHdfsError};

const LIST_STATUS_RSP: &str = r#"
{
  "FileStatuses":
  {
    "FileStatus":
    [
      {
        "accessTime"      : 1320171722771,
        "blockSize"       : 33554432,
        "group"           : "supergroup",
        "length"          : 24930,
        "modificationTime": 1320171722771,
        "owner"           : "webuser",
        "pathSuffix"      : "a.patch",
        "permission"      : "644",
        "replication"     : 1,
        "type"            : "FILE"
      },
      {
        "accessTime"      : 0,
        "blockSize"       : 0,
        "group"           : "supergroup",
        "length"          : 0,
        "modificationTime": 1320895981256,
        "owner"           : "szetszwo",
        "pathSuffix"      : "bar",
        "permission"      : "711",
        "replication"     : 0,
        "type"            : "DIRECTORY"
      }
    ]
  }
}
"#;

const FILE_STATUS_RSP: &str = r#"
{
  "FileStatus":
  {
    "accessTime"      : 0,
    "blockSize"       : 0,
    "group"           : "supergroup",
    "length"          : 0,
    "modificationTime": 1320173277227,
    "owner"           : "webuser",
    "pathSuffix"      : "",
    "permission"      : "777",
    "replication"     : 0,
    "type"            : "DIRECTORY"
  }
}
"#;

const CONTENT_SUMMARY_RSP: &str = r#"
{
  "ContentSummary":
  {
    "directoryCount": 2,
    "fileCount"     : 1,
    "length"        : 24930,
    "quota"         : -1,
    "spaceConsumed" : 24930,
    "spaceQuota"    : -1
  }
}
"#;

const FILE_CHECKSUM_RSP: &str = r#"
{
  "FileChecksum":
  {
    "algorithm": "MD5-of-1MD5-of-512CRC32",
    "bytes"    : "eadb10de24aa315748930df6e185c0d ...",
    "length"   : 28
  }
}
"#;

const NOT_FOUND_RSP: &str = r#"
{
  "RemoteException":
  {
    "exception"    : "FileNotFoundException",
    "javaClassName": "java.io.FileNotFoundException",
    "message"      : "File does not exist: /missing"
  }
}
"#;

#[tokio::test]
async fn test_rename() {
    let server = MockNameNode::ok(r#"{"Boolean":true}"#).await;
    let fs = server.filesystem();

    let ok = fs
        .rename(&Path::new("/testing"), &Path::new("/testing/newname"))
        .await
        .unwrap();
    assert!(ok);

    let req = server.single_request();
    assert_eq!(req.method, Method::PUT);
    assert_eq!(req.path, "/webhdfs/v1/testing");
    assert_eq!(req.keys(), vec!["op", "destination"]);
    assert_eq!(req.param("op"), Some("RENAME"));
    assert_eq!(req.param("destination"), Some("/testing/newname"));
}

#[tokio::test]
async fn test_mkdirs() {
    let server = MockNameNode::ok(r#"{"Boolean":true}"#).await;
    let fs = server.filesystem();

    assert!(fs.mkdirs(&Path::new("/test"), 0o744).await.unwrap());

    let req = server.single_request();
    assert_eq!(req.method, Method::PUT);
    assert_eq!(req.param("op"), Some("MKDIRS"));
    assert_eq!(req.param("permission"), Some("744"));
}

#[tokio::test]
async fn test_mkdirs_default_permission() {
    let server = MockNameNode::ok(r#"{"Boolean":true}"#).await;
    let fs = FileSystem::new(Configuration::new(server.address()).with_default_permission(0o700))
        .unwrap();

    assert!(fs.mkdirs_default(&Path::new("/test")).await.unwrap());
    assert_eq!(server.single_request().param("permission"), Some("700"));
}

#[tokio::test]
async fn test_create_symlink_empty_body() {
    let server = MockNameNode::ok("").await;
    let fs = server.filesystem();

    let ok = fs
        .create_symlink(&Path::new("/test/orig"), &Path::new("/symlink"), false)
        .await
        .unwrap();
    assert!(ok);

    let req = server.single_request();
    assert_eq!(req.method, Method::PUT);
    assert_eq!(req.path, "/webhdfs/v1/symlink");
    assert_eq!(req.param("op"), Some("CREATESYMLINK"));
    assert_eq!(req.param("destination"), Some("/test/orig"));
    assert_eq!(req.param("createParent"), Some("false"));
}

#[tokio::test]
async fn test_create_symlink_boolean_body() {
    let server = MockNameNode::ok(r#"{"Boolean":false}"#).await;
    let fs = server.filesystem();

    let ok = fs
        .create_symlink(&Path::new("/test/orig"), &Path::new("/a/link"), true)
        .await
        .unwrap();
    assert!(!ok);
    assert_eq!(server.single_request().param("createParent"), Some("true"));
}

#[tokio::test]
async fn test_get_file_status() {
    let server = MockNameNode::ok(FILE_STATUS_RSP).await;
    let fs = server.filesystem();

    let status = fs.get_file_status(&Path::new("/test")).await.unwrap();
    assert_eq!(status.permission, "777");
    assert_eq!(status.file_type, FileType::Directory);

    let req = server.single_request();
    assert_eq!(req.method, Method::GET);
    assert_eq!(req.keys(), vec!["op"]);
    assert_eq!(req.param("op"), Some("GETFILESTATUS"));
}

#[tokio::test]
async fn test_list_status() {
    let server = MockNameNode::ok(LIST_STATUS_RSP).await;
    let fs = server.filesystem();

    let statuses = fs.list_status(&Path::new("/test")).await.unwrap();
    assert_eq!(statuses.len(), 2);
    assert_eq!(statuses[0].path_suffix, "a.patch");
    assert!(statuses[0].is_file());
    assert_eq!(statuses[1].path_suffix, "bar");
    assert!(statuses[1].is_dir());

    let req = server.single_request();
    assert_eq!(req.method, Method::GET);
    assert_eq!(req.param("op"), Some("LISTSTATUS"));
}

#[tokio::test]
async fn test_get_content_summary() {
    let server = MockNameNode::ok(CONTENT_SUMMARY_RSP).await;
    let fs = server.filesystem();

    let summary = fs.get_content_summary(&Path::new("/test")).await.unwrap();
    assert_eq!(summary.space_consumed, 24930);
    assert!(!summary.has_quota());
    assert_eq!(server.single_request().param("op"), Some("GETCONTENTSUMMARY"));
}

#[tokio::test]
async fn test_get_file_checksum() {
    let server = MockNameNode::ok(FILE_CHECKSUM_RSP).await;
    let fs = server.filesystem();

    let checksum = fs.get_file_checksum(&Path::new("/test")).await.unwrap();
    assert_eq!(checksum.algorithm, "MD5-of-1MD5-of-512CRC32");
    assert_eq!(checksum.length, 28);

    let req = server.single_request();
    assert_eq!(req.method, Method::GET);
    assert_eq!(req.param("op"), Some("GETFILECHECKSUM"));
}

#[tokio::test]
async fn test_get_home_directory() {
    let server = MockNameNode::ok(r#"{"Path":"/user/webuser"}"#).await;
    let fs = server.filesystem();

    let home = fs.get_home_directory().await.unwrap();
    assert_eq!(home, Path::new("/user/webuser"));

    let req = server.single_request();
    assert_eq!(req.path, "/webhdfs/v1/");
    assert_eq!(req.param("op"), Some("GETHOMEDIRECTORY"));
}

#[tokio::test]
async fn test_delete() {
    let server = MockNameNode::ok(r#"{"Boolean":true}"#).await;
    let fs = server.filesystem();

    assert!(fs.delete(&Path::new("/tmp/old"), true).await.unwrap());

    let req = server.single_request();
    assert_eq!(req.method, Method::DELETE);
    assert_eq!(req.param("op"), Some("DELETE"));
    assert_eq!(req.param("recursive"), Some("true"));
}

#[tokio::test]
async fn test_attribute_setters() {
    let server = MockNameNode::ok("").await;
    let fs = server.filesystem();
    let path = Path::new("/data/file");

    fs.set_permission(&path, 0o640).await.unwrap();
    fs.set_owner(&path, Some("hdfs"), None).await.unwrap();
    fs.set_times(&path, Some(1320173277227), None).await.unwrap();

    let requests = server.requests();
    assert_eq!(requests.len(), 3);
    assert!(requests.iter().all(|r| r.method == Method::PUT));

    assert_eq!(requests[0].param("op"), Some("SETPERMISSION"));
    assert_eq!(requests[0].param("permission"), Some("640"));

    assert_eq!(requests[1].keys(), vec!["op", "owner"]);
    assert_eq!(requests[1].param("owner"), Some("hdfs"));

    assert_eq!(requests[2].param("op"), Some("SETTIMES"));
    assert_eq!(requests[2].param("modificationtime"), Some("1320173277227"));
    assert_eq!(requests[2].param("accesstime"), Some("-1"));
}

#[tokio::test]
async fn test_set_replication_and_truncate() {
    let server = MockNameNode::ok(r#"{"Boolean":true}"#).await;
    let fs = server.filesystem();
    let path = Path::new("/data/file");

    assert!(fs.set_replication(&path, 2).await.unwrap());
    assert!(fs.truncate(&path, 1024).await.unwrap());

    let requests = server.requests();
    assert_eq!(requests[0].method, Method::PUT);
    assert_eq!(requests[0].param("replication"), Some("2"));
    assert_eq!(requests[1].method, Method::POST);
    assert_eq!(requests[1].param("op"), Some("TRUNCATE"));
    assert_eq!(requests[1].param("newlength"), Some("1024"));
}

#[tokio::test]
async fn test_concat() {
    let server = MockNameNode::ok("").await;
    let fs = server.filesystem();

    fs.concat(
        &Path::new("/data/all"),
        &[Path::new("/data/part-0"), Path::new("/data/part-1")],
    )
    .await
    .unwrap();

    let req = server.single_request();
    assert_eq!(req.method, Method::POST);
    assert_eq!(req.param("sources"), Some("/data/part-0,/data/part-1"));
}

#[tokio::test]
async fn test_user_name_is_sent() {
    let server = MockNameNode::ok(FILE_STATUS_RSP).await;
    let fs = FileSystem::new(Configuration::new(server.address()).with_user("webuser")).unwrap();

    fs.get_file_status(&Path::new("/test")).await.unwrap();

    let req = server.single_request();
    assert_eq!(req.keys(), vec!["op", "user.name"]);
    assert_eq!(req.param("user.name"), Some("webuser"));
}

#[tokio::test]
async fn test_remote_error() {
    let server = MockNameNode::start(404, NOT_FOUND_RSP).await;
    let fs = server.filesystem();

    let err = fs.get_file_status(&Path::new("/missing")).await.unwrap_err();
    assert!(err.is_remote());
    assert_eq!(err.status(), Some(404));
    let exception = err.remote_exception().unwrap();
    assert_eq!(exception.kind(), RemoteExceptionKind::FileNotFound);
    assert_eq!(exception.message, "File does not exist: /missing");
    assert!(err.to_string().contains("File does not exist: /missing"));
}

#[tokio::test]
async fn test_remote_error_without_payload() {
    let server = MockNameNode::start(500, "").await;
    let fs = server.filesystem();

    let err = fs
        .rename(&Path::new("/a"), &Path::new("/b"))
        .await
        .unwrap_err();
    assert!(matches!(err, WebHdfsError::Remote { status: 500, exception: None, .. }));
}

#[tokio::test]
async fn test_decode_error() {
    let server = MockNameNode::ok(r#"{"Bool":true}"#).await;
    let fs = server.filesystem();

    let err = fs
        .rename(&Path::new("/a"), &Path::new("/b"))
        .await
        .unwrap_err();
    assert!(err.is_decode());
    assert!(!err.is_remote());
}

#[tokio::test]
async fn test_transport_error() {
    let fs = FileSystem::new(Configuration::new(closed_address().await)).unwrap();

    let err = fs.list_status(&Path::new("/test")).await.unwrap_err();
    assert!(err.is_transport(), "unexpected error: {:?}", err);
    assert!(!err.is_decode());
}

#[tokio::test]
async fn test_usage_errors_send_nothing() {
    let server = MockNameNode::ok(r#"{"Boolean":true}"#).await;
    let fs = server.filesystem();

    let err = fs.list_status(&Path::new("relative/path")).await.unwrap_err();
    assert!(err.is_usage());
    let err = fs.set_owner(&Path::new("/a"), None, None).await.unwrap_err();
    assert!(err.is_usage());
    let err = fs.mkdirs(&Path::new("/a"), 0o7777).await.unwrap_err();
    assert!(err.is_usage());
    let err = fs.concat(&Path::new("/a"), &[]).await.unwrap_err();
    assert!(err.is_usage());

    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn test_shared_between_tasks() {
    let server = MockNameNode::ok(FILE_STATUS_RSP).await;
    let fs = Arc::new(server.filesystem());

    let mut handles = Vec::new();
    for i in 0..4 {
        let fs = fs.clone();
        handles.push(tokio::spawn(async move {
            let path = Path::new(format!("/dir/{}", i));
            fs.get_file_status(&path).await
        }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap().permission, "777");
    }

    let mut paths: Vec<String> = server.requests().into_iter().map(|r| r.path).collect();
    paths.sort();
    assert_eq!(
        paths,
        vec![
            "/webhdfs/v1/dir/0",
            "/webhdfs/v1/dir/1",
            "/webhdfs/v1/dir/2",
            "/webhdfs/v1/dir/3",
        ]
    );
}

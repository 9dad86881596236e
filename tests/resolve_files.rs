use condor_jobs::{DagDocument, Error, JobInputs, SubDocument, find_job_names};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const DAG: &str = "\
# two runs of the same template
JOB A jobs/foo.sub
JOB B jobs/foo.sub
JOB C jobs/bar.sub
VARS A IN=\"a.txt\" OUT=\"b.txt\"
VARS B IN=\"c.txt\" OUT=\"d.txt\"
VARS C IN=\"x\" OUT=\"y\"
PARENT A CHILD B
";

const SUB: &str = "\
universe   = vanilla
executable = /bin/cat
arguments  = \"$(IN) $(OUT)\"
log        = foo.log
queue
";

fn write_pair(dag: &str, sub: &str) -> (TempDir, PathBuf, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let dag_path = dir.path().join("workflow.dag");
    let sub_dir = dir.path().join("jobs");
    fs::create_dir(&sub_dir).unwrap();
    let sub_path = sub_dir.join("foo.sub");
    fs::write(&dag_path, dag).unwrap();
    fs::write(&sub_path, sub).unwrap();
    (dir, dag_path, sub_path)
}

#[test]
fn single_job_end_to_end() {
    let (_dir, dag, sub) = write_pair(
        "JOB A foo.sub\nVARS A IN=\"a.txt\" OUT=\"b.txt\"",
        "executable = /bin/cat\narguments = \"$(IN) $(OUT)\"",
    );
    let commands = JobInputs::files(&dag, &sub).commands().unwrap();
    assert_eq!(commands, vec!["/bin/cat a.txt b.txt"]);
}

#[test]
fn multiple_jobs_in_declaration_order() {
    let (_dir, dag, sub) = write_pair(DAG, SUB);
    let inputs = JobInputs::files(&dag, &sub);
    assert_eq!(inputs.arguments().unwrap(), vec!["a.txt b.txt", "c.txt d.txt"]);
    assert_eq!(
        inputs.commands().unwrap(),
        vec!["/bin/cat a.txt b.txt", "/bin/cat c.txt d.txt"]
    );
}

#[test]
fn documents_load_from_disk() {
    let (_dir, dag, sub) = write_pair(DAG, SUB);
    let dag = DagDocument::from_path(&dag).unwrap();
    assert_eq!(find_job_names(dag.as_str(), "foo.sub").unwrap(), vec!["A", "B"]);
    assert_eq!(dag.job_names("elsewhere/bar.sub").unwrap(), vec!["C"]);

    let content = SubDocument::from_path(&sub).unwrap().parse().unwrap();
    assert_eq!(content.executable().unwrap(), "/bin/cat");
    assert_eq!(content.get("universe"), Some("vanilla"));
}

#[test]
fn sub_not_referenced_by_dag_is_not_found() {
    let (dir, dag, _sub) = write_pair(DAG, SUB);
    let other = dir.path().join("other.sub");
    fs::write(&other, SUB).unwrap();

    let err = JobInputs::files(&dag, &other).commands().unwrap_err();
    assert!(matches!(err, Error::NotFound { sub_file } if sub_file == "other.sub"));
}

#[test]
fn missing_dag_file_is_io_error() {
    let (dir, _dag, sub) = write_pair(DAG, SUB);
    let missing = dir.path().join("missing.dag");

    let err = JobInputs::files(&missing, &sub).commands().unwrap_err();
    assert!(matches!(err, Error::Io { ref path, .. } if *path == missing));
    assert_eq!(
        err.to_string(),
        format!("read {}", missing.display())
    );
}

#[test]
fn undeclared_placeholder_fails_whole_batch() {
    let (_dir, dag, sub) = write_pair(
        "JOB A foo.sub\nVARS A IN=\"a.txt\"\n",
        "executable = /bin/cat\narguments = $(IN) $(OUT)\n",
    );
    let err = JobInputs::files(&dag, &sub).commands().unwrap_err();
    assert_eq!(err.to_string(), "job A does not define variable $(OUT)");
}

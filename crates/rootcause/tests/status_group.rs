use std::thread;

use pretty_assertions::assert_eq;
use rootcause::{Code, Status, StatusGroup};

#[test]
fn summarizes_parallel_workers() {
    let results: Vec<Status> = thread::scope(|scope| {
        let handles: Vec<_> = (0..6)
            .map(|worker| {
                scope.spawn(move || match worker {
                    2 => Status::resource_exhausted("worker 2 out of memory"),
                    3 | 4 => StatusGroup::make_derived(&Status::cancelled(format!(
                        "worker {worker} cancelled"
                    ))),
                    _ => Status::OK,
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    let mut group = StatusGroup::new();
    for status in &results {
        group.update(status);
    }

    assert_eq!(group.ok_count(), 3);
    assert_eq!(group.children().len(), 3);

    let summary = group.as_summary_status();
    assert_eq!(summary.code(), Code::ResourceExhausted);
    assert_eq!(summary.message(), "worker 2 out of memory");
}

#[test]
fn concatenates_per_task_summaries() {
    let mut tasks = Vec::new();
    for task in 0..2 {
        let mut group = StatusGroup::new();
        group.update(&Status::OK);
        group.update(&Status::internal(format!("task {task} step a")));
        group.update(&Status::unavailable(format!("task {task} step b")));
        tasks.push(group.as_summary_status());
    }

    let mut outer = StatusGroup::new();
    for summary in &tasks {
        outer.update(summary);
    }

    let status = outer.as_concatenated_status();
    assert_eq!(status.code(), Code::Internal);
    assert!(
        status
            .message()
            .starts_with("\n=====================\nINTERNAL: 2 root error(s) found.")
    );
    assert!(status.message().ends_with("=====================\n"));
    assert!(status.message().contains("task 1 step b"));
}

#[test]
fn first_error_wins_across_a_pipeline() {
    let stages = [
        Status::OK,
        Status::failed_precondition("stage 1 not initialized"),
        Status::internal("stage 2 crashed"),
    ];

    let mut status = Status::OK;
    for stage in &stages {
        status.update(stage);
    }

    assert_eq!(status.to_string(), "FAILED_PRECONDITION: stage 1 not initialized");
    assert!(status.into_result().is_err());
}

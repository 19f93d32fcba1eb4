#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use lupin::libs::categorizer::{bucket_of, categorize, Bucket};
    use lupin::libs::presenter::render_summary;
    use lupin::libs::task::{Task, TaskList};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn at(d: u32) -> NaiveDateTime {
        day(d).and_hms_opt(10, 0, 0).unwrap()
    }

    fn scheduled(title: &str, date: Option<u32>) -> Task {
        let mut task = Task::new(title, at(1)).unwrap();
        if let Some(d) = date {
            task.reschedule(at(d));
        }
        task
    }

    /// Monday 2024-06-10 with one task per bucket plus a completed past task.
    fn week() -> TaskList {
        let mut done = scheduled("Done yesterday", Some(9));
        done.mark_completed(at(9)).unwrap();

        TaskList::from_tasks(vec![
            scheduled("Late", Some(9)),
            scheduled("Now", Some(10)),
            scheduled("Friday", Some(14)),
            scheduled("Someday", None),
            done,
        ])
        .unwrap()
    }

    fn titles(tasks: &[&Task]) -> Vec<String> {
        tasks.iter().map(|task| task.title().to_string()).collect()
    }

    #[test]
    fn test_week_scenario() {
        let tasks = week();
        let buckets = categorize(&tasks, day(10));

        assert_eq!(titles(&buckets.overdue), vec!["Late"]);
        assert_eq!(titles(&buckets.today), vec!["Now"]);
        assert_eq!(titles(&buckets.this_week), vec!["Friday"]);
        assert_eq!(titles(&buckets.unscheduled), vec!["Someday"]);
    }

    #[test]
    fn test_completed_past_task_is_in_no_bucket() {
        let tasks = week();
        let buckets = categorize(&tasks, day(10));

        assert_eq!(buckets.total(), 4);
        let done = tasks.iter().find(|task| task.title() == "Done yesterday").unwrap();
        assert_eq!(bucket_of(done, day(10)), None);
        for bucket in [Bucket::Unscheduled, Bucket::Today, Bucket::ThisWeek, Bucket::Overdue] {
            assert!(!titles(buckets.get(bucket)).contains(&"Done yesterday".to_string()));
        }
    }

    #[test]
    fn test_week_boundaries() {
        let sunday = scheduled("Sunday", Some(16));
        let next_monday = scheduled("Next Monday", Some(17));

        assert_eq!(bucket_of(&sunday, day(10)), Some(Bucket::ThisWeek));
        assert_eq!(bucket_of(&next_monday, day(10)), None);
        assert_eq!(bucket_of(&next_monday, day(17)), Some(Bucket::Today));
    }

    #[test]
    fn test_completed_today_stays_in_today() {
        let mut task = scheduled("Now", Some(10));
        task.mark_completed(at(10)).unwrap();
        assert_eq!(bucket_of(&task, day(10)), Some(Bucket::Today));
    }

    #[test]
    fn test_canceled_past_task_is_overdue() {
        let mut task = scheduled("Dropped", Some(3));
        task.mark_canceled().unwrap();
        assert_eq!(bucket_of(&task, day(10)), Some(Bucket::Overdue));
    }

    #[test]
    fn test_summary_rendering() {
        let tasks = week();
        let summary = render_summary(&categorize(&tasks, day(10)));

        assert!(summary.starts_with("📋 Current Tasks Summary:"));
        assert!(summary.contains("📌 Not Scheduled:\n🔸 Someday"));
        assert!(summary.contains("⏰ Overdue Tasks:\n🔸 Late"));
        assert!(!summary.contains("Done yesterday"));

        let empty = TaskList::new();
        let summary = render_summary(&categorize(&empty, day(10)));
        assert_eq!(summary.matches("No tasks").count(), 4);
    }
}

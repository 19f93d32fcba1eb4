//! Sorts tasks into schedule buckets relative to a reference day.
//!
//! | scheduled date                     | bucket      |
//! |------------------------------------|-------------|
//! | none                               | unscheduled |
//! | before today, not completed        | overdue     |
//! | today (any status)                 | today       |
//! | after today, up to Sunday          | this week   |
//! | before today and completed         | none        |
//! | after this week's Sunday           | none        |
//!
//! Completed tasks from past days are never flagged, so they appear in no
//! bucket at all.

use super::schedule::end_of_week;
use super::task::Task;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Unscheduled,
    Today,
    ThisWeek,
    Overdue,
}

/// The four buckets, each in input order.
#[derive(Debug, Default)]
pub struct Buckets<'a> {
    pub unscheduled: Vec<&'a Task>,
    pub today: Vec<&'a Task>,
    pub this_week: Vec<&'a Task>,
    pub overdue: Vec<&'a Task>,
}

impl<'a> Buckets<'a> {
    pub fn get(&self, bucket: Bucket) -> &[&'a Task] {
        match bucket {
            Bucket::Unscheduled => &self.unscheduled,
            Bucket::Today => &self.today,
            Bucket::ThisWeek => &self.this_week,
            Bucket::Overdue => &self.overdue,
        }
    }

    pub fn total(&self) -> usize {
        self.unscheduled.len() + self.today.len() + self.this_week.len() + self.overdue.len()
    }
}

pub fn bucket_of(task: &Task, today: NaiveDate) -> Option<Bucket> {
    let Some(scheduled) = task.date_scheduled() else {
        return Some(Bucket::Unscheduled);
    };
    let scheduled = scheduled.date();

    if scheduled < today && !task.is_completed() {
        Some(Bucket::Overdue)
    } else if scheduled == today {
        Some(Bucket::Today)
    } else if today < scheduled && scheduled <= end_of_week(today) {
        Some(Bucket::ThisWeek)
    } else {
        None
    }
}

pub fn categorize<'a, I>(tasks: I, today: NaiveDate) -> Buckets<'a>
where
    I: IntoIterator<Item = &'a Task>,
{
    let mut buckets = Buckets::default();
    for task in tasks {
        match bucket_of(task, today) {
            Some(Bucket::Unscheduled) => buckets.unscheduled.push(task),
            Some(Bucket::Today) => buckets.today.push(task),
            Some(Bucket::ThisWeek) => buckets.this_week.push(task),
            Some(Bucket::Overdue) => buckets.overdue.push(task),
            None => {}
        }
    }
    buckets
}

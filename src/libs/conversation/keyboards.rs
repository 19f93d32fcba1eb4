//! Reply keyboards and the button labels the conversation reacts to.

pub const START: &str = "/start";
pub const BACK: &str = "Back";
pub const DONE: &str = "Done";
pub const ALL: &str = "all";

pub const PLAN: &str = "Plan";
pub const DO: &str = "Do";
pub const CONTROL: &str = "Control";
pub const SETTINGS: &str = "Settings";

pub const ADD_TASK: &str = "Add Task";
pub const LIST_TASKS: &str = "List Tasks";
pub const SCHEDULE_TASKS: &str = "Schedule Tasks";
pub const BRAINSTORM: &str = "Brainstorm Ideas";

pub const TODAY: &str = "Today";
pub const TOMORROW: &str = "Tomorrow";
pub const LATER_THIS_WEEK: &str = "Later this week";
pub const NEXT_WEEK: &str = "Next week";
pub const CUSTOM_DATE: &str = "Custom date";
pub const SKIP: &str = "Skip";
pub const STOP_SCHEDULING: &str = "Stop Scheduling";

pub const REVIEW_OVERDUE: &str = "Review Overdue Tasks";
pub const REVIEW_TODAY: &str = "Review Today's Tasks";
pub const EDIT_TASKS: &str = "Edit Tasks";
pub const ANALYZE: &str = "Analyze & Control";

pub const COMPLETE: &str = "Complete";
pub const CANCEL_TASK: &str = "Cancel Task";
pub const DELETE_TASK: &str = "Delete Task";
pub const RESCHEDULE_TOMORROW: &str = "Reschedule for Tomorrow";
pub const RESCHEDULE_NEXT_WEEK: &str = "Reschedule for Next Week";
pub const STOP_REVIEW: &str = "Stop Review";

/// A fixed grid of reply options shown under a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keyboard {
    rows: &'static [&'static [&'static str]],
}

impl Keyboard {
    pub const fn new(rows: &'static [&'static [&'static str]]) -> Self {
        Keyboard { rows }
    }

    pub fn rows(&self) -> &'static [&'static [&'static str]] {
        self.rows
    }
}

pub const MAIN_MENU_KEYBOARD: Keyboard = Keyboard::new(&[&[PLAN, DO], &[CONTROL, SETTINGS], &[DONE]]);

pub const PLAN_KEYBOARD: Keyboard = Keyboard::new(&[&[ADD_TASK, LIST_TASKS], &[SCHEDULE_TASKS, BRAINSTORM], &[BACK]]);

pub const SCHEDULE_KEYBOARD: Keyboard = Keyboard::new(&[
    &[TODAY, TOMORROW],
    &[LATER_THIS_WEEK, NEXT_WEEK],
    &[CUSTOM_DATE],
    &[SKIP, STOP_SCHEDULING],
]);

pub const CONTROL_KEYBOARD: Keyboard = Keyboard::new(&[&[REVIEW_OVERDUE, REVIEW_TODAY], &[EDIT_TASKS, ANALYZE], &[BACK]]);

pub const REVIEW_KEYBOARD: Keyboard = Keyboard::new(&[
    &[COMPLETE, CANCEL_TASK],
    &[DELETE_TASK],
    &[RESCHEDULE_TOMORROW, RESCHEDULE_NEXT_WEEK],
    &[SKIP, STOP_REVIEW],
]);

/// Case-insensitive match of user input against a button label.
pub fn is(input: &str, label: &str) -> bool {
    input.trim().eq_ignore_ascii_case(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_ignores_case_and_padding() {
        assert!(is("  list tasks ", LIST_TASKS));
        assert!(is("DONE", DONE));
        assert!(!is("List", LIST_TASKS));
    }

    #[test]
    fn test_review_keyboard_offers_every_action() {
        let labels: Vec<&str> = REVIEW_KEYBOARD.rows().iter().flat_map(|row| row.iter().copied()).collect();
        assert_eq!(
            labels,
            vec![COMPLETE, CANCEL_TASK, DELETE_TASK, RESCHEDULE_TOMORROW, RESCHEDULE_NEXT_WEEK, SKIP, STOP_REVIEW]
        );
    }
}

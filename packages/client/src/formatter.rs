//! Message formatting utilities for client display.

use std::collections::{HashMap, HashSet};

use hibiki_shared::time::timestamp_to_rfc3339;

use crate::domain::User;

/// Message formatter for client display
pub struct MessageFormatter;

impl MessageFormatter {
    /// Format the roster showing every user with presence and activity
    ///
    /// # Arguments
    ///
    /// * `users` - Full roster
    /// * `online_users` - Ids of currently-online users
    /// * `user_activities` - Activity per user id
    /// * `current_user_id` - The current user's ID (to mark as "me")
    ///
    /// # Returns
    ///
    /// A formatted string with the user list
    pub fn format_roster(
        users: &[User],
        online_users: &HashSet<String>,
        user_activities: &HashMap<String, String>,
        current_user_id: &str,
    ) -> String {
        let mut output = String::new();
        output.push_str("\n\n============================================================\n");
        output.push_str("Users:\n");

        if users.is_empty() {
            output.push_str("(No users)\n");
        } else {
            for user in users {
                let me_suffix = if user.id == current_user_id { " (me)" } else { "" };
                let presence = if online_users.contains(&user.id) {
                    "online"
                } else {
                    "offline"
                };
                let activity = user_activities
                    .get(&user.id)
                    .map(|a| format!(" - {}", a))
                    .unwrap_or_default();
                output.push_str(&format!(
                    "{}{} [{}]{}\n",
                    user.name, me_suffix, presence, activity
                ));
            }
        }

        output.push_str("============================================================\n");
        output
    }

    /// Format a user-came-online notification
    ///
    /// # Arguments
    ///
    /// * `user_id` - The ID of the user who came online
    ///
    /// # Returns
    ///
    /// A formatted string with the online notification
    pub fn format_user_online(user_id: &str) -> String {
        format!("\n+ {} is now online\n", user_id)
    }

    /// Format a user-went-offline notification
    ///
    /// # Arguments
    ///
    /// * `user_id` - The ID of the user who went offline
    ///
    /// # Returns
    ///
    /// A formatted string with the offline notification
    pub fn format_user_offline(user_id: &str) -> String {
        format!("\n- {} is now offline\n", user_id)
    }

    /// Format an activity-change notification
    ///
    /// # Arguments
    ///
    /// * `user_id` - The ID of the user whose activity changed
    /// * `activity` - The new activity text
    ///
    /// # Returns
    ///
    /// A formatted string with the activity notification
    pub fn format_activity_updated(user_id: &str, activity: &str) -> String {
        format!("\n~ {}: {}\n", user_id, activity)
    }

    /// Format a chat message
    ///
    /// # Arguments
    ///
    /// * `from` - The user ID of the sender
    /// * `content` - The message content
    /// * `sent_at` - Unix timestamp when the message was sent (milliseconds)
    ///
    /// # Returns
    ///
    /// A formatted string with the chat message
    pub fn format_chat_message(from: &str, content: &str, sent_at: i64) -> String {
        let timestamp_str = timestamp_to_rfc3339(sent_at);
        format!(
            "\n\n------------------------------------------------------------\n\
             @{}: {}\n\
             sent at {}\n\
             ------------------------------------------------------------\n",
            from, content, timestamp_str
        )
    }

    /// Format a confirmation message after a sent message is echoed back
    ///
    /// # Arguments
    ///
    /// * `sent_at` - Unix timestamp when the message was sent (milliseconds)
    ///
    /// # Returns
    ///
    /// A formatted string with the sent confirmation
    pub fn format_sent_confirmation(sent_at: i64) -> String {
        let timestamp_str = timestamp_to_rfc3339(sent_at);
        format!("sent at {}\n", timestamp_str)
    }

    /// Format a fetch-failure notice for display
    ///
    /// # Arguments
    ///
    /// * `message` - The server-provided error message
    ///
    /// # Returns
    ///
    /// A formatted string with the error notice
    pub fn format_fetch_error(message: &str) -> String {
        format!("\n! {}\n", message)
    }
}

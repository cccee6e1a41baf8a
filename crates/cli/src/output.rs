use directory_index::IndexStats;
use directory_model::UserId;
use serde::Serialize;

/// One row of the main name list
#[derive(Debug, Serialize)]
pub struct ListedUser {
    pub id: UserId,
    pub name: String,
}

/// `list` payload
#[derive(Debug, Serialize)]
pub struct ListOutput {
    pub users: Vec<ListedUser>,
    pub stats: IndexStats,
}

/// `show` payload: one user's detail panel
#[derive(Debug, Serialize)]
pub struct DetailOutput {
    pub id: UserId,
    pub name: String,
    pub friends: Vec<String>,
    pub suggestions: Vec<String>,
}

/// `top` payload
#[derive(Debug, Serialize)]
pub struct TopOutput {
    pub top: Vec<String>,
}

/// `overview` payload: name list plus the most-referenced panel
#[derive(Debug, Serialize)]
pub struct OverviewOutput {
    pub users: Vec<ListedUser>,
    pub top: Vec<String>,
    pub stats: IndexStats,
}

pub fn render_list(out: &ListOutput) -> String {
    let mut text = String::new();
    push_users(&mut text, &out.users);
    text
}

pub fn render_detail(out: &DetailOutput) -> String {
    let mut text = String::new();
    text.push_str(&format!("{} (id {})\n\n", out.name, out.id));

    text.push_str("Friends:\n");
    push_names(&mut text, &out.friends);

    text.push_str("\nNot yet connected:\n");
    push_names(&mut text, &out.suggestions);
    text
}

pub fn render_top(out: &TopOutput) -> String {
    let mut text = String::new();
    push_top(&mut text, &out.top);
    text
}

pub fn render_overview(out: &OverviewOutput) -> String {
    let mut text = String::new();
    push_users(&mut text, &out.users);
    text.push('\n');
    push_top(&mut text, &out.top);
    text
}

fn push_users(text: &mut String, users: &[ListedUser]) {
    text.push_str(&format!("Users ({}):\n", users.len()));
    for user in users {
        text.push_str(&format!("{:>4}  {}\n", user.id, user.name));
    }
}

fn push_top(text: &mut String, top: &[String]) {
    text.push_str("Most referenced:\n");
    if top.is_empty() {
        text.push_str("  (none)\n");
        return;
    }
    for (position, name) in top.iter().enumerate() {
        text.push_str(&format!("{:>4}. {}\n", position + 1, name));
    }
}

fn push_names(text: &mut String, names: &[String]) {
    if names.is_empty() {
        text.push_str("  (none)\n");
        return;
    }
    for name in names {
        text.push_str(&format!("  - {}\n", name));
    }
}

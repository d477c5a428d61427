//! Thin view composition: page navigation and plain-text rendering.

use crate::models::MemberRecord;

/// Top-level page the shell is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Overview,
    Directory,
}

/// One rendered directory table row.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub id: String,
    /// Combined image-marker + name cell.
    pub name: String,
    pub status: String,
    pub role: String,
    pub email: String,
    pub teams: String,
}

/// Project the filtered view into display rows.
pub fn table_rows(members: &[&MemberRecord]) -> Vec<TableRow> {
    members
        .iter()
        .map(|m| TableRow {
            id: m.id.clone(),
            name: if m.profile_image.is_empty() {
                m.name.clone()
            } else {
                format!("[img] {}", m.name)
            },
            status: m.status.to_string(),
            role: m.role.clone(),
            email: m.email.clone(),
            teams: m.teams.clone(),
        })
        .collect()
}

/// Render the directory table with its heading and user count.
pub fn render_table(rows: &[TableRow]) -> String {
    let mut out = String::new();
    out.push_str("Team members\n");
    out.push_str(&format!("{} users\n", rows.len()));
    out.push_str(&format!(
        "{:<24} {:<10} {:<16} {:<28} {}\n",
        "NAME", "STATUS", "ROLE", "EMAIL", "TEAMS"
    ));
    for row in rows {
        out.push_str(&format!(
            "{:<24} {:<10} {:<16} {:<28} {}\n",
            row.name, row.status, row.role, row.email, row.teams
        ));
    }
    out
}

/// Render the detail side panel for a selected member.
pub fn render_detail(member: &MemberRecord) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} | {}\n", member.name, member.status));
    out.push_str(&format!("User ID: {} | Role: {}\n", member.id, member.role));
    out.push_str("Personal Information\n");
    out.push_str(&format!("  E-mail Address   {}\n", member.email));
    out.push_str(&format!("  Teams            {}\n", member.teams));
    if !member.profile_image.is_empty() {
        out.push_str("  Profile photo attached\n");
    }
    out
}

/// Render the overview landing page.
pub fn render_overview() -> String {
    "Overview\nUse 'directory' to open the team directory.\n".to_string()
}

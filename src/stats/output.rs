use crate::error::Result;
use crate::model::{
    BranchSummary, CommitRecord, ReportOutput, RepositoryIdentity, StatEntry, UserRole,
    SCHEMA_VERSION,
};
use crate::util::format_timestamp;
use chrono::Utc;
use console::style;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Users,
    Branches,
    Commits,
    Stats,
}

impl Section {
    pub fn title(&self) -> &'static str {
        match self {
            Section::Users => "Users and Roles:",
            Section::Branches => "Branches:",
            Section::Commits => "Commits:",
            Section::Stats => "User Stats:",
        }
    }
}

/// Sink for report events, called in the order they are produced.
pub trait Reporter {
    fn begin_section(&mut self, section: Section) -> Result<()>;
    fn user(&mut self, user: &UserRole) -> Result<()>;
    fn branch(&mut self, branch: &BranchSummary) -> Result<()>;
    fn commit(&mut self, commit: &CommitRecord) -> Result<()>;
    fn stat(&mut self, stat: &StatEntry) -> Result<()>;
    fn finish(&mut self) -> Result<()>;
}

/// Line-per-event plain text, written as soon as each event arrives.
pub struct TextReporter<W: Write> {
    out: W,
    sections: usize,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out, sections: 0 }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn begin_section(&mut self, section: Section) -> Result<()> {
        if self.sections > 0 {
            writeln!(self.out)?;
        }
        self.sections += 1;
        writeln!(self.out, "{}", style(section.title()).bold())?;
        Ok(())
    }

    fn user(&mut self, user: &UserRole) -> Result<()> {
        writeln!(self.out, "- {} | {}", user.name, user.role)?;
        Ok(())
    }

    fn branch(&mut self, branch: &BranchSummary) -> Result<()> {
        match &branch.first_commit_at {
            Some(ts) => writeln!(self.out, "- {} | {}", branch.name, format_timestamp(ts))?,
            None => writeln!(self.out, "- {} | No commits found", branch.name)?,
        }
        Ok(())
    }

    fn commit(&mut self, commit: &CommitRecord) -> Result<()> {
        writeln!(
            self.out,
            "{} | {} | {} | {}",
            format_timestamp(&commit.timestamp),
            commit.sha,
            commit.author,
            commit.message
        )?;
        Ok(())
    }

    fn stat(&mut self, stat: &StatEntry) -> Result<()> {
        writeln!(
            self.out,
            "- {} | {} | {} commits",
            stat.name, stat.role, stat.commit_count
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum Event<'a> {
    User(&'a UserRole),
    Branch(&'a BranchSummary),
    Commit(&'a CommitRecord),
    Stat(&'a StatEntry),
}

/// One JSON object per event, tagged with `kind`.
pub struct NdjsonReporter<W: Write> {
    out: W,
}

impl<W: Write> NdjsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, event: Event<'_>) -> Result<()> {
        serde_json::to_writer(&mut self.out, &event)?;
        writeln!(self.out)?;
        Ok(())
    }
}

impl<W: Write> Reporter for NdjsonReporter<W> {
    fn begin_section(&mut self, _section: Section) -> Result<()> {
        Ok(())
    }

    fn user(&mut self, user: &UserRole) -> Result<()> {
        self.emit(Event::User(user))
    }

    fn branch(&mut self, branch: &BranchSummary) -> Result<()> {
        self.emit(Event::Branch(branch))
    }

    fn commit(&mut self, commit: &CommitRecord) -> Result<()> {
        self.emit(Event::Commit(commit))
    }

    fn stat(&mut self, stat: &StatEntry) -> Result<()> {
        self.emit(Event::Stat(stat))
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// Collects everything and writes a single document on `finish`.
pub struct JsonReporter<W: Write> {
    out: W,
    report: ReportOutput,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W, identity: &RepositoryIdentity) -> Self {
        Self {
            out,
            report: ReportOutput {
                version: SCHEMA_VERSION,
                generated_at: Utc::now(),
                repository: identity.to_string(),
                users: Vec::new(),
                branches: Vec::new(),
                commits: Vec::new(),
                stats: Vec::new(),
            },
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn begin_section(&mut self, _section: Section) -> Result<()> {
        Ok(())
    }

    fn user(&mut self, user: &UserRole) -> Result<()> {
        self.report.users.push(user.clone());
        Ok(())
    }

    fn branch(&mut self, branch: &BranchSummary) -> Result<()> {
        self.report.branches.push(branch.clone());
        Ok(())
    }

    fn commit(&mut self, commit: &CommitRecord) -> Result<()> {
        self.report.commits.push(commit.clone());
        Ok(())
    }

    fn stat(&mut self, stat: &StatEntry) -> Result<()> {
        self.report.stats.push(stat.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.out, &self.report)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

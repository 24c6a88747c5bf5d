use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;

/// Logical identifier for a navigable page.
///
/// The closed set replaces the free-form page-name strings the permission
/// table would otherwise be keyed by: an identifier that does not parse is
/// not representable, so a typo cannot silently fall through to a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Admin,
    AllIssues,
    MyAssignedIssues,
    AssignmentNotifications,
    CompletedIssueHistory,
    ContractorDashboard,
    ContractorForm,
    Dashboard,
    IssueHistory,
    Login,
    ManagerDashboard,
    MyIssues,
    NewIssue,
    Notifications,
    OtherIssues,
    Profile,
    Register,
    Survey,
    Tenants,
    Unauthorized,
}

impl Page {
    pub const ALL: [Page; 20] = [
        Page::Admin,
        Page::AllIssues,
        Page::MyAssignedIssues,
        Page::AssignmentNotifications,
        Page::CompletedIssueHistory,
        Page::ContractorDashboard,
        Page::ContractorForm,
        Page::Dashboard,
        Page::IssueHistory,
        Page::Login,
        Page::ManagerDashboard,
        Page::MyIssues,
        Page::NewIssue,
        Page::Notifications,
        Page::OtherIssues,
        Page::Profile,
        Page::Register,
        Page::Survey,
        Page::Tenants,
        Page::Unauthorized,
    ];

    /// Route slug without the leading slash
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::AllIssues => "all-issues",
            Self::MyAssignedIssues => "my-assigned-issues",
            Self::AssignmentNotifications => "assignment-notifications",
            Self::CompletedIssueHistory => "completed-issue-history",
            Self::ContractorDashboard => "contractordashboard",
            Self::ContractorForm => "contractorform",
            Self::Dashboard => "dashboard",
            Self::IssueHistory => "issue-history",
            Self::Login => "login",
            Self::ManagerDashboard => "managerdashboard",
            Self::MyIssues => "my-issues",
            Self::NewIssue => "new-issue",
            Self::Notifications => "notifications",
            Self::OtherIssues => "other-issues",
            Self::Profile => "profile",
            Self::Register => "register",
            Self::Survey => "survey",
            Self::Tenants => "tenants",
            Self::Unauthorized => "unauthorized",
        }
    }

    /// Absolute route path
    pub fn path(&self) -> String {
        format!("/{}", self.as_str())
    }

    /// Resolve a pathname to a page identifier.
    ///
    /// The leading slash is stripped and the root path maps to the
    /// dashboard. Pathnames that match no known page return `None`; the
    /// route guard treats those as denied rather than public.
    pub fn from_path(pathname: &str) -> Option<Page> {
        let slug = pathname.strip_prefix('/').unwrap_or(pathname);
        if slug.is_empty() {
            return Some(Page::Dashboard);
        }
        slug.parse().ok()
    }
}

impl FromStr for Page {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        Page::ALL
            .iter()
            .find(|page| page.as_str() == s)
            .copied()
            .ok_or_else(|| CoreError::InvalidPage {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

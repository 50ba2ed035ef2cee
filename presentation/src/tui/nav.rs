//! Screen navigation
//!
//! The screen set is closed: every destination is a [`Screen`] variant and
//! every transition carries its payload in [`NavTarget`]. Transition side
//! effects (clearing selections, resetting scroll, the home reset) are
//! applied by the state in one place, `TuiState::navigate`.

use poliscope_domain::PolicyType;

/// Every screen the UI can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    SignUp,
    Login,
    PolicyAdvisorChat,
    PolicyListing,
    PolicyDetails,
    UploadDocument,
    Payment,
}

impl Screen {
    /// Title shown in the header.
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::SignUp => "Sign Up",
            Screen::Login => "Log In",
            Screen::PolicyAdvisorChat => "Policy Advisor",
            Screen::PolicyListing => "Policies",
            Screen::PolicyDetails => "Policy Details",
            Screen::UploadDocument => "Upload Document",
            Screen::Payment => "Payment",
        }
    }
}

/// How the chat screen was reached
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEntry {
    /// Opened from the menu with no context
    Direct,
    /// Opened from home with a selected type and budget
    FromHome,
    /// Opened for one specific policy
    WithPolicy(String),
    /// Opened with the current comparison selection
    WithComparison(Vec<String>),
}

/// A navigation request with its typed payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    Home,
    SignUp,
    Login,
    Listing(PolicyType),
    Details { policy_id: String },
    Chat(ChatEntry),
    UploadDocument,
    Payment,
}

impl NavTarget {
    pub fn screen(&self) -> Screen {
        match self {
            NavTarget::Home => Screen::Home,
            NavTarget::SignUp => Screen::SignUp,
            NavTarget::Login => Screen::Login,
            NavTarget::Listing(_) => Screen::PolicyListing,
            NavTarget::Details { .. } => Screen::PolicyDetails,
            NavTarget::Chat(_) => Screen::PolicyAdvisorChat,
            NavTarget::UploadDocument => Screen::UploadDocument,
            NavTarget::Payment => Screen::Payment,
        }
    }
}

/// Where Esc leads from each screen.
///
/// Details returns to the listing of the same type, payment returns to
/// the chat that opened it, and the chat itself backs all the way out to
/// a fresh home screen.
pub fn back_target(screen: Screen, listing_type: Option<PolicyType>) -> Option<NavTarget> {
    match screen {
        Screen::Home => None,
        Screen::PolicyDetails => Some(NavTarget::Listing(
            listing_type.unwrap_or(PolicyType::Health),
        )),
        Screen::PolicyListing => Some(NavTarget::Home),
        Screen::PolicyAdvisorChat => Some(NavTarget::Home),
        Screen::Payment => Some(NavTarget::Chat(ChatEntry::Direct)),
        Screen::SignUp | Screen::Login | Screen::UploadDocument => Some(NavTarget::Home),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_maps_to_screen() {
        assert_eq!(NavTarget::Home.screen(), Screen::Home);
        assert_eq!(
            NavTarget::Listing(PolicyType::Motor).screen(),
            Screen::PolicyListing
        );
        assert_eq!(
            NavTarget::Chat(ChatEntry::Direct).screen(),
            Screen::PolicyAdvisorChat
        );
    }

    #[test]
    fn test_back_rules() {
        assert_eq!(back_target(Screen::Home, None), None);
        assert_eq!(
            back_target(Screen::PolicyDetails, Some(PolicyType::Term)),
            Some(NavTarget::Listing(PolicyType::Term))
        );
        assert_eq!(back_target(Screen::PolicyListing, None), Some(NavTarget::Home));
        assert_eq!(
            back_target(Screen::Payment, None),
            Some(NavTarget::Chat(ChatEntry::Direct))
        );
        assert_eq!(
            back_target(Screen::PolicyAdvisorChat, Some(PolicyType::Health)),
            Some(NavTarget::Home)
        );
    }
}

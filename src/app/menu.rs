//! Per-call-site context menu capabilities.
//!
//! Each place a track row is shown declares which actions its menu offers.
//! New contexts add a constructor entry instead of another branch at render time.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuContext {
    Playlist,
    Library,
    Liked,
    Admin,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Play,
    Like,
    AddToPlaylist,
    RemoveFromPlaylist,
    RemoveFromLiked,
    Edit,
    Delete,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuCapabilities {
    pub play: bool,
    pub like: bool,
    pub add_to_playlist: bool,
    pub remove_from_playlist: bool,
    pub remove_from_liked: bool,
    pub edit: bool,
    pub delete: bool,
}

impl MenuCapabilities {
    pub fn for_context(context: MenuContext) -> Self {
        match context {
            MenuContext::Playlist => Self {
                play: true,
                like: true,
                add_to_playlist: true,
                remove_from_playlist: true,
                ..Self::default()
            },
            MenuContext::Library => Self {
                play: true,
                like: true,
                add_to_playlist: true,
                ..Self::default()
            },
            MenuContext::Liked => Self {
                play: true,
                add_to_playlist: true,
                remove_from_liked: true,
                ..Self::default()
            },
            MenuContext::Admin => Self {
                play: true,
                edit: true,
                delete: true,
                ..Self::default()
            },
        }
    }

    /// Actions offered by either set, e.g. a view's menu plus the admin tools.
    pub fn union(self, other: Self) -> Self {
        Self {
            play: self.play || other.play,
            like: self.like || other.like,
            add_to_playlist: self.add_to_playlist || other.add_to_playlist,
            remove_from_playlist: self.remove_from_playlist || other.remove_from_playlist,
            remove_from_liked: self.remove_from_liked || other.remove_from_liked,
            edit: self.edit || other.edit,
            delete: self.delete || other.delete,
        }
    }

    /// Enabled actions in menu order.
    pub fn actions(&self) -> Vec<MenuAction> {
        [
            (self.play, MenuAction::Play),
            (self.like, MenuAction::Like),
            (self.add_to_playlist, MenuAction::AddToPlaylist),
            (self.remove_from_playlist, MenuAction::RemoveFromPlaylist),
            (self.remove_from_liked, MenuAction::RemoveFromLiked),
            (self.edit, MenuAction::Edit),
            (self.delete, MenuAction::Delete),
        ]
        .into_iter()
        .filter_map(|(enabled, action)| enabled.then_some(action))
        .collect()
    }

    pub fn allows(&self, action: MenuAction) -> bool {
        self.actions().contains(&action)
    }
}

impl MenuAction {
    pub fn label(self) -> &'static str {
        match self {
            MenuAction::Play => "Play",
            MenuAction::Like => "Like",
            MenuAction::AddToPlaylist => "Add to playlist",
            MenuAction::RemoveFromPlaylist => "Remove from playlist",
            MenuAction::RemoveFromLiked => "Remove from liked",
            MenuAction::Edit => "Edit",
            MenuAction::Delete => "Delete",
        }
    }
}

use crate::config::ModifierKey;

/// Title of the note created for an empty vault.
pub const WELCOME_TITLE: &str = "Welcome";

/// Body of the welcome note, with shortcuts spelled for `modifier`.
pub fn welcome_text(modifier: ModifierKey) -> String {
    let new = modifier.shortcut('N');
    let save = modifier.shortcut('S');
    let search = modifier.shortcut('F');
    let quit = modifier.shortcut('Q');
    format!(
        "# Welcome to Notes! 📝\n\
         \n\
         This is your personal notebook: one markdown file per note.\n\
         \n\
         ## Features\n\
         \n\
         - **Create** new notes with the + button\n\
         - **Edit** notes in the editor panel\n\
         - **Delete** notes with right-click\n\
         - **Search** notes with {search}\n\
         \n\
         ## Keyboard Shortcuts\n\
         \n\
         - `{new}` - New note\n\
         - `{save}` - Save note\n\
         - `{search}` - Search\n\
         - `F2` - Rename note\n\
         - `{quit}` - Save all and quit\n\
         \n\
         Supports Turkish keyboard: ş, ğ, ü, ö, ç, ı\n\
         \n\
         Start writing your notes!\n"
    )
}

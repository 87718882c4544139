use chipline::app::App;
use chipline::chip::TokenListEditor;
use chipline::ui::TuiManager;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let editor = TokenListEditor::with_tokens(vec!["rust".to_string(), "tui".to_string()]);

    let mut tui = TuiManager::new()?;
    let mut app = App::new(editor, tui.release_events());
    tui.run_event_loop(&mut app)?;

    // restore the terminal before printing the final list
    drop(tui);
    for token in app.editor().tokens() {
        println!("{token}");
    }

    Ok(())
}

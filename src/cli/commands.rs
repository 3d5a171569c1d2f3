//! Commands command implementation (voice and keyboard help)

use voxlearn::access::HELP_PATH;
use voxlearn::access::commands::commands_by_category;
use voxlearn::access::keyboard::SHORTCUTS;

/// Print the voice command and keyboard shortcut tables
pub fn commands_command() {
    println!("Voice commands:\n");
    for (category, commands) in commands_by_category() {
        println!("  {}", category);
        for command in commands {
            println!("    \"{}\" - {}", command.phrase, command.description);
        }
        println!();
    }
    println!("  Any visible button or link: \"click <label>\"\n");

    println!("Keyboard shortcuts:\n");
    for shortcut in SHORTCUTS {
        println!("  {:<8} {}", shortcut.keys, shortcut.announcement);
    }

    println!("\nFull help page: {}", HELP_PATH);
}

//! Built-in demo portfolio, used when no content directory loads.

use folio_content::ContentTree;

/// Built-in portfolio used when no content directory is available.
pub fn demo_content() -> ContentTree {
    let mut tree = ContentTree::new();

    tree.insert_page(
        "help",
        "Available commands:\n\
         \x20 <span class=\"text-green-400\">about</span>       Who I am\n\
         \x20 <span class=\"text-green-400\">experience</span>  Where I've worked (try --list)\n\
         \x20 <span class=\"text-green-400\">projects</span>    Things I've built\n\
         \x20 <span class=\"text-green-400\">game</span>        Play a guessing game\n\
         \x20 <span class=\"text-green-400\">clear</span>       Clear the screen",
    );
    tree.insert_page(
        "about",
        "Systems engineer who likes small tools, fast feedback, and plain text.\n\
         This terminal is served from a box under my desk.",
    );
    tree.insert_page(
        "projects",
        "- folio: this terminal\n- a handful of embedded toys",
    );

    tree.insert_page(
        "experience",
        "Run `experience --list` to see companies, then\n\
         `experience --company \"NAME\"` for details.",
    );
    tree.insert_sub_page(
        "experience",
        "help",
        "Usage:\n\
         \x20 experience --list\n\
         \x20 experience --company \"COMPANY_NAME\"",
    );
    tree.insert_sub_page(
        "experience",
        "Acme Corp",
        "Senior Engineer, 2021-present\n- Built the deploy pipeline\n- Owned on-call tooling",
    );
    tree.insert_sub_page(
        "experience",
        "Globex",
        "Software Engineer, 2018-2021\n- Wrote the billing exporter",
    );

    tree.insert_page(
        "game",
        "🎯 <span class=\"text-green-400\">Number Guessing Game</span>\n\
         I'm thinking of a number between 1 and 100. You have 7 attempts.\n\
         Type \"hint\" for a hint or \"quit\" to leave.",
    );

    tree
}

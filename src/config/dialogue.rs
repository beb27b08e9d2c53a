//! English text shown to the user

pub struct GameDialogue {
    pub name: &'static str,
    pub description: &'static str,
    pub instructions: &'static str,
}

pub const CONNECTIONS: GameDialogue = GameDialogue {
    name: "Connections",
    description: "Sort sixteen words into four groups of four.",
    instructions: "Put today's sixteen words in connections.txt and known categories \
                   (NAME: word, word, ...) in categories.txt.",
};

pub const KENKEN: GameDialogue = GameDialogue {
    name: "KenKen",
    description: "Fill the grid so every row and column has each number once \
                  and every cage meets its target.",
    instructions: "Put the puzzle in kenken.txt: the size, a letter per cell naming its cage, \
                   then each cage's target and operator in letter order.",
};

pub const MINI_CROSSWORD: GameDialogue = GameDialogue {
    name: "Mini Crossword",
    description: "Fill a small crossword grid with words that cross correctly.",
    instructions: "Put the grid in mini_crossword.txt using # for blocks and . for blanks, \
                   optionally followed by a blank line and clues such as 1A: clue.",
};

pub const STRANDS: GameDialogue = GameDialogue {
    name: "Strands",
    description: "Find the theme words that use every letter on the board once.",
    instructions: "Put the letter grid in strands.txt, one row per line.",
};

pub const SUDOKU: GameDialogue = GameDialogue {
    name: "Sudoku",
    description: "Fill the grid so every row, column and box has each number once.",
    instructions: "Put the puzzle in sudoku.txt with . or 0 for blanks, \
                   or remove the file to generate a new puzzle.",
};

pub const WORDLE: GameDialogue = GameDialogue {
    name: "Wordle",
    description: "Guess the five letter word in six tries.",
    instructions: "Type a guess and press enter. Green letters are in the right spot, \
                   orange letters are in the word but elsewhere. To get help with \
                   today's game instead, record your guesses in wordle.txt as: crane BYGBB",
};

// Menu
pub const MENU_TITLE: &str = "Choose a game to play:";
pub const NOT_AVAILABLE: &str = "(not available)";
pub const VIEW_LEADERBOARD: &str = "View Leaderboard";
pub const QUIT: &str = "Quit";
pub const LEADERBOARD_TITLE: &str = "Leaderboards:";
pub const UNAVAILABLE: &str = "Unavailable";
pub const INVALID_SELECTION: &str = "Invalid selection";
pub const PROMPT: &str = "> ";

// Solver results
pub const SOLVED: &str = "Puzzle solved";
pub const UNSOLVABLE: &str = "Puzzle is not solvable";
pub const MULTIPLE_SOLUTIONS: &str = "Puzzle has multiple solutions";

// Wordle
pub const INVALID_WORD: &str = "Invalid word";
pub const YOU_WIN: &str = "You Win! The word was:";
pub const GAME_OVER: &str = "Game Over! The word was:";

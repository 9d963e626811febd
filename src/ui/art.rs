use crate::sim::game::PiePose;

pub const PIE_HEIGHT: usize = 6;

type PieArt = [&'static str; PIE_HEIGHT];

const PIE_IDLE: [PieArt; 2] = [
    [
        "   ~     ~    ",
        "  ~   ~   ~   ",
        "   .-''''''-. ",
        "  /          \\",
        " |  ~~~ ~~ ~~ |",
        "  \\__________/ ",
    ],
    [
        "     ~   ~    ",
        "  ~     ~   ~ ",
        "   .-''''''-. ",
        "  /          \\",
        " |  ~~~ ~~ ~~ |",
        "  \\__________/ ",
    ],
];

const PIE_PRESSED: PieArt = [
    "   \\  ^  ^  / ",
    "    \\ ^  ^ /  ",
    "   .-''''''-. ",
    "  /   O  O   \\",
    " |    ===     |",
    "  \\__________/ ",
];

const GOLDEN_IDLE: [PieArt; 2] = [
    [
        "   *     *    ",
        "  *   *   *   ",
        "   .-$$$$$$-. ",
        "  /  $    $  \\",
        " | $$$ $$ $$$ |",
        "  \\$$$$$$$$$$/ ",
    ],
    [
        "     *   *    ",
        "  *     *   * ",
        "   .-$$$$$$-. ",
        "  /  $    $  \\",
        " | $$$ $$ $$$ |",
        "  \\$$$$$$$$$$/ ",
    ],
];

const GOLDEN_PRESSED: PieArt = [
    "   \\  *  *  / ",
    "    \\ *  * /  ",
    "   .-$$$$$$-. ",
    "  /   O  O   \\",
    " |    $$$     |",
    "  \\$$$$$$$$$$/ ",
];

pub const CELEBRATION_PIE: [&str; 10] = [
    "    .-~~~~~-.    ",
    "   /         \\   ",
    "  |   *   *   |  ",
    "  |  =======  |  ",
    "   \\ ~~~~~~~ /   ",
    "    `-------`    ",
    "     \\     /     ",
    "      \\   /      ",
    "       \\ /       ",
    "        V        ",
];

pub const FIREWORKS: [&str; 5] = [
    "   *  .  *  .  *   ",
    " .    *    *    .  ",
    "   .  *  *  *      ",
    " *   .     *   .   ",
    "      *  .  *      ",
];

pub fn pie(pose: PiePose, golden: bool) -> &'static PieArt {
    match (pose, golden) {
        (PiePose::Pressed, false) => &PIE_PRESSED,
        (PiePose::Pressed, true) => &GOLDEN_PRESSED,
        (PiePose::Idle(frame), false) => &PIE_IDLE[frame % PIE_IDLE.len()],
        (PiePose::Idle(frame), true) => &GOLDEN_IDLE[frame % GOLDEN_IDLE.len()],
    }
}

//! Common English words.
//!
//! Roughly the thousand words a plain-language writer can lean on without a
//! second thought. Single-letter words are left out; they always classify as
//! short anyway.

/// Built-in list of common words, all lowercase.
pub const COMMON_WORDS: &[&str] = &[
    // A-B
    "able", "about", "above", "across", "act", "actually", "add", "afraid", "after",
    "afternoon", "again", "against", "age", "ago", "agree", "ahead", "air", "all", "allow",
    "almost", "alone", "along", "already", "alright", "also", "although", "always", "am",
    "among", "an", "and", "angry", "animal", "another", "answer", "any", "anyone", "anything",
    "anyway", "anywhere", "apart", "apple", "are", "area", "arm", "around", "arrive", "art",
    "as", "ask", "asleep", "at", "attack", "away", "baby", "back", "bad", "bag", "ball", "bank",
    "bar", "base", "basket", "bath", "be", "bear", "beat", "beautiful", "became", "because",
    "become", "bed", "bedroom", "been", "before", "began", "begin", "behind", "being",
    "believe", "bell", "belong", "below", "beside", "best", "better", "between", "big", "bird",
    "birth", "birthday", "bit", "bite", "black", "bleed", "block", "blood", "blow", "blue",
    "board", "boat", "body", "bone", "book", "border", "born", "borrow", "both", "bottle",
    "bottom", "bowl", "box", "boy", "brain", "branch", "brave", "bread", "break", "breakfast",
    "breathe", "bridge", "bright", "bring", "brother", "brown", "brush", "build", "burn", "bus",
    "business", "busy", "but", "buy", "by",

    // C-D
    "cake", "call", "came", "can", "car", "card", "care", "careful", "carry", "case", "cat",
    "catch", "cause", "cell", "center", "chair", "chance", "change", "chase", "cheap", "check",
    "cheese", "chicken", "child", "children", "chocolate", "choice", "choose", "circle", "city",
    "class", "clean", "clear", "climb", "clock", "close", "cloth", "clothes", "cloud", "coat",
    "coffee", "cold", "college", "color", "come", "common", "computer", "confuse", "contain",
    "continue", "control", "cook", "cool", "copy", "corn", "corner", "cost", "could", "count",
    "country", "course", "cover", "cow", "crash", "crazy", "cream", "create", "creature",
    "cross", "crowd", "cry", "cup", "cut", "cute", "dad", "damage", "dance", "danger", "dark",
    "date", "daughter", "day", "dead", "deal", "dear", "death", "decide", "deep", "deer",
    "desk", "destroy", "did", "die", "different", "difficult", "dig", "dinner", "direction",
    "dirt", "dirty", "discover", "dish", "do", "doctor", "does", "dog", "done", "door",
    "double", "doubt", "down", "draw", "dream", "dress", "drink", "drive", "drop", "dry",
    "duck", "during", "dust",

    // E-G
    "each", "ear", "early", "earth", "easy", "eat", "edge", "effect", "egg", "eight", "either",
    "else", "empty", "end", "enemy", "enjoy", "enough", "enter", "entire", "equal", "escape",
    "even", "evening", "event", "ever", "every", "everyone", "everything", "exact", "except",
    "excite", "exercise", "expect", "explain", "explode", "extra", "eye", "face", "fact",
    "fail", "fall", "false", "family", "famous", "far", "farm", "fast", "fat", "father",
    "fault", "fear", "feed", "feel", "female", "fever", "few", "field", "fight", "figure",
    "fill", "film", "final", "find", "fine", "finger", "finish", "fire", "first", "fish", "fit",
    "five", "fix", "flag", "flat", "float", "floor", "flour", "flower", "fly", "fold", "follow",
    "food", "fool", "foot", "for", "force", "forest", "forever", "forget", "forgive", "form",
    "forward", "four", "free", "freeze", "fresh", "friend", "frog", "from", "front", "fruit",
    "full", "fun", "funny", "future", "game", "garden", "gate", "gave", "general", "get",
    "gift", "girl", "give", "glad", "glass", "go", "goat", "god", "gold", "golf", "gone",
    "good", "got", "grab", "grass", "gray", "great", "green", "ground", "group", "grow",
    "guard", "guess", "guide", "gun", "guy",

    // H-L
    "hair", "half", "hall", "hand", "hang", "happen", "happy", "hard", "harm", "hat", "hate",
    "have", "he", "head", "hear", "heart", "heat", "heavy", "held", "hello", "help", "her",
    "here", "hero", "hide", "high", "hill", "him", "his", "hit", "hold", "hole", "holiday",
    "home", "hope", "horse", "hospital", "hot", "hotel", "hour", "house", "how", "however",
    "huge", "human", "hundred", "hungry", "hunt", "hurry", "hurt", "husband", "ice", "idea",
    "if", "important", "in", "inside", "instead", "interest", "into", "iron", "is", "island",
    "it", "its", "itself", "job", "join", "joke", "joy", "juice", "jump", "just", "keep", "key",
    "kick", "kid", "kill", "kind", "king", "kiss", "kitchen", "knee", "knife", "knock", "know",
    "lady", "lake", "land", "language", "large", "last", "late", "laugh", "law", "lay", "lazy",
    "lead", "leaf", "learn", "least", "leave", "left", "leg", "less", "let", "letter", "lie",
    "life", "lift", "light", "like", "line", "lion", "lip", "list", "listen", "little", "live",
    "lock", "long", "look", "lose", "lost", "lot", "loud", "love", "low", "luck", "lunch",

    // M-P
    "machine", "mad", "made", "mail", "main", "make", "male", "man", "many", "map", "mark",
    "market", "marry", "matter", "may", "maybe", "me", "meal", "mean", "measure", "meat",
    "meet", "member", "memory", "message", "metal", "middle", "might", "mile", "milk", "mind",
    "mine", "minute", "miss", "mistake", "mix", "modern", "mom", "moment", "money", "monkey",
    "month", "moon", "more", "morning", "most", "mother", "mountain", "mouse", "mouth", "move",
    "movie", "much", "music", "must", "my", "myself", "name", "nation", "natural", "near",
    "neck", "need", "never", "new", "news", "next", "nice", "night", "nine", "no", "noise",
    "none", "nor", "normal", "north", "nose", "not", "note", "nothing", "notice", "now",
    "number", "nurse", "ocean", "of", "off", "offer", "office", "often", "oh", "oil", "okay",
    "old", "on", "once", "one", "only", "open", "or", "orange", "order", "other", "our", "out",
    "outside", "over", "own", "page", "pain", "paint", "pair", "paper", "parent", "park",
    "part", "party", "pass", "past", "path", "pay", "peace", "pen", "people", "person", "pet",
    "phone", "pick", "picture", "piece", "pig", "pink", "place", "plan", "plane", "plant",
    "plate", "play", "please", "pocket", "point", "police", "poor", "popular", "position",
    "possible", "pot", "power", "press", "pretty", "price", "prince", "princess", "problem",
    "promise", "proud", "pull", "push", "put",

    // Q-S
    "queen", "question", "quick", "quiet", "quite", "race", "radio", "rain", "raise", "ran",
    "reach", "read", "ready", "real", "reason", "red", "remember", "repeat", "rest", "rice",
    "rich", "ride", "right", "ring", "rise", "river", "road", "rock", "roll", "roof", "room",
    "root", "rope", "round", "rule", "run", "sad", "safe", "said", "sail", "salt", "same",
    "sand", "save", "saw", "say", "school", "science", "sea", "search", "season", "seat",
    "second", "secret", "see", "seem", "sell", "send", "sense", "serious", "set", "seven",
    "several", "shake", "shape", "share", "sharp", "she", "sheep", "shelf", "shine", "ship",
    "shirt", "shoe", "shoot", "shop", "short", "should", "shoulder", "shout", "show", "shut",
    "sick", "side", "sign", "silly", "simple", "since", "sing", "sister", "sit", "six", "size",
    "skin", "sky", "sleep", "slow", "small", "smart", "smell", "smile", "smoke", "snake",
    "snow", "so", "soft", "some", "someone", "something", "sometimes", "son", "song", "soon",
    "sorry", "sound", "soup", "south", "space", "speak", "special", "speed", "spend", "spot",
    "spring", "square", "stand", "star", "start", "state", "stay", "step", "stick", "still",
    "stone", "stop", "store", "storm", "story", "strange", "street", "strong", "student",
    "study", "stupid", "such", "sugar", "summer", "sun", "sure", "surprise", "sweet", "swim",
    "system",

    // T-Z
    "table", "tail", "take", "talk", "tall", "taste", "tea", "teach", "team", "tear", "teeth",
    "tell", "ten", "test", "than", "thank", "that", "the", "their", "them", "then", "there",
    "these", "they", "thick", "thin", "thing", "think", "third", "this", "those", "though",
    "thought", "three", "through", "throw", "tie", "time", "tiny", "tired", "to", "today",
    "together", "told", "tomorrow", "tone", "tonight", "too", "took", "top", "touch", "toward",
    "town", "toy", "train", "trap", "tree", "trip", "trouble", "true", "trust", "truth", "try",
    "turn", "twelve", "twenty", "two", "type", "ugly", "uncle", "under", "understand", "until",
    "up", "upon", "us", "use", "usual", "very", "view", "village", "visit", "voice", "wait",
    "wake", "walk", "wall", "want", "war", "warm", "was", "wash", "watch", "water", "wave",
    "way", "we", "wear", "weather", "week", "weight", "well", "went", "were", "west", "wet",
    "what", "wheel", "when", "where", "whether", "which", "while", "white", "who", "whole",
    "why", "wide", "wife", "wild", "will", "win", "wind", "window", "wing", "winter", "wire",
    "wish", "with", "without", "woman", "wonder", "wood", "word", "work", "world", "worry",
    "would", "write", "wrong", "yard", "year", "yellow", "yes", "yesterday", "yet", "you",
    "young", "your", "yourself", "zero",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_are_lowercase_ascii() {
        assert!(
            COMMON_WORDS
                .iter()
                .all(|w| w.chars().all(|c| c.is_ascii_lowercase()))
        );
    }

    #[test]
    fn has_everyday_words() {
        for word in ["the", "water", "because", "yesterday", "people"] {
            assert!(COMMON_WORDS.contains(&word), "missing {word}");
        }
    }

    #[test]
    fn no_duplicates() {
        let unique: std::collections::HashSet<_> = COMMON_WORDS.iter().collect();
        assert_eq!(unique.len(), COMMON_WORDS.len());
    }

    #[test]
    fn no_single_letters() {
        assert!(COMMON_WORDS.iter().all(|w| w.len() > 1));
    }
}

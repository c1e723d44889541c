/// A small sorted word list for the benches.
pub const WORDS: &[&str] = &[
    "able", "about", "above", "act", "add", "after", "again", "age", "ago", "air", "all", "also",
    "and", "any", "are", "area", "arm", "art", "ask", "ate", "away", "back", "bad", "bag", "bake",
    "ball", "band", "bank", "bar", "base", "bat", "bear", "beat", "bed", "bee", "best", "bet",
    "big", "bird", "bit", "blue", "boat", "body", "bone", "book", "born", "both", "box", "boy",
    "bread", "break", "bring", "brown", "bus", "but", "buy", "cab", "cake", "call", "came", "can",
    "cap", "car", "card", "care", "case", "cat", "cats", "cell", "chair", "change", "cold", "come",
    "cook", "cool", "corn", "cost", "cow", "cows", "cup", "cut", "dark", "date", "day", "dear",
    "deep", "did", "die", "dig", "dog", "dogs", "door", "down", "draw", "dream", "dress", "drink",
    "drive", "drop", "dry", "due", "each", "ear", "earn", "ease", "east", "eat", "edge", "egg",
    "end", "even", "ever", "eye", "face", "fact", "fail", "fair", "fall", "far", "farm", "fast",
    "fat", "fear", "feel", "feet", "few", "fill", "find", "fine", "fire", "fish", "fit", "five",
    "flat", "fly", "food", "foot", "form", "four", "free", "friend", "from", "full", "fun", "game",
    "gas", "gate", "gave", "get", "gift", "girl", "give", "glad", "go", "goat", "gold", "gone",
    "good", "got", "grass", "great", "green", "grow", "had", "hair", "half", "hall", "hand",
    "hard", "has", "hat", "hate", "have", "head", "hear", "heat", "help", "her", "here", "hide",
    "high", "hill", "him", "his", "hit", "hold", "hole", "home", "hope", "horse", "hot", "hour",
    "house", "how", "hunt", "ice", "idea", "inch", "into", "iron", "jam", "jar", "job", "join",
    "joke", "joy", "jump", "just", "keep", "key", "kid", "kind", "king", "kiss", "knee", "knew",
    "know", "lake", "land", "last", "late", "lead", "leaf", "learn", "left", "leg", "less", "let",
    "lie", "life", "lift", "light", "like", "line", "lion", "list", "live", "load", "long", "look",
    "lose", "lost", "lot", "love", "low", "made", "mail", "main", "make", "man", "many", "map",
    "mark", "meal", "meat", "meet", "milk", "mind", "miss", "moon", "more", "most", "move", "much",
    "must", "name", "near", "neck", "need", "nest", "net", "new", "news", "next", "nice", "night",
    "nine", "none", "nose", "note", "now", "oak", "oil", "old", "once", "one", "only", "open",
    "out", "over", "own", "pack", "page", "paid", "pain", "pair", "park", "part", "pass", "past",
    "path", "pay", "pen", "pet", "pick", "pie", "pin", "place", "plan", "planet", "planets",
    "play", "quiz", "rain", "ran", "rat", "read", "real", "rest", "rice", "rich", "ride", "ring",
    "rise", "road", "rock", "roof", "room", "root", "rope", "rose", "rule", "run", "rust", "sad",
    "safe", "said", "sail", "salt", "same", "sand", "sat", "save", "saw", "say", "sea", "seat",
    "see", "seed", "sell", "send", "set", "shape", "she", "ship", "shoe", "shop", "shot", "show",
    "shut", "side", "sign", "sing", "sit", "six", "size", "skin", "sky", "sleep", "slow", "small",
    "snow", "soft", "soil", "some", "song", "soon", "sort", "soul", "star", "stay", "step", "stop",
    "such", "sun", "sure", "swim", "table", "tail", "take", "talk", "tall", "tap", "taste", "tea",
    "team", "tell", "ten", "test", "than", "that", "the", "then", "they", "thin", "this", "tie",
    "time", "tin", "tiny", "toe", "told", "tone", "too", "top", "toy", "tree", "trip", "true",
    "try", "turn", "two", "unit", "use", "very", "view", "vote", "wait", "walk", "wall", "want",
    "warm", "was", "wash", "wave", "way", "wear", "week", "well", "went", "west", "wet", "what",
    "when", "who", "wide", "wife", "will", "win", "wind", "wine", "wing", "wise", "wish", "with",
    "wolf", "wood", "word", "wore", "work", "worn", "yard", "year", "yes", "yet", "you", "zero",
    "zoo",
];

//! Stopword and detection-marker tables. All entries are lowercase.

pub(super) const ENGLISH: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and",
    "any", "are", "as", "at", "be", "because", "been", "before", "being", "below",
    "between", "both", "but", "by", "can", "could", "did", "do", "does", "doing", "done",
    "down", "during", "each", "even", "few", "for", "from", "further", "get", "got", "had",
    "has", "have", "having", "he", "her", "here", "hers", "herself", "him", "himself",
    "his", "how", "however", "if", "in", "into", "is", "it", "its", "itself", "just",
    "let", "like", "may", "me", "might", "more", "most", "much", "must", "my", "myself",
    "no", "nor", "not", "now", "of", "off", "ok", "okay", "on", "once", "only", "or",
    "other", "our", "ours", "ourselves", "out", "over", "own", "really", "same", "say",
    "said", "shall", "she", "should", "so", "some", "such", "than", "that", "the",
    "their", "theirs", "them", "themselves", "then", "there", "these", "they", "this",
    "those", "through", "to", "too", "under", "until", "up", "us", "very", "was", "we",
    "well", "were", "what", "when", "where", "which", "while", "who", "whom", "why",
    "will", "with", "would", "yeah", "yes", "you", "your", "yours", "yourself",
    "yourselves", "um", "uh",
];

pub(super) const SPANISH: &[&str] = &[
    "a", "al", "algo", "algunas", "algunos", "ante", "antes", "como", "con", "contra",
    "cual", "cuando", "de", "del", "desde", "donde", "durante", "e", "el", "ella",
    "ellas", "ellos", "en", "entre", "era", "eran", "es", "esa", "esas", "ese", "eso",
    "esos", "esta", "estaba", "estado", "estamos", "están", "estar", "este", "esto",
    "estos", "está", "fue", "fueron", "ha", "han", "hasta", "hay", "la", "las", "le",
    "les", "lo", "los", "me", "mi", "mis", "mucho", "muy", "más", "nada", "ni", "no",
    "nos", "nosotros", "o", "os", "otra", "otro", "para", "pero", "poco", "por",
    "porque", "que", "qué", "quien", "se", "sea", "ser", "si", "sido", "sin", "sobre",
    "son", "su", "sus", "también", "tanto", "te", "tiene", "tienen", "todo", "todos",
    "tu", "tus", "un", "una", "unas", "uno", "unos", "vosotros", "y", "ya", "yo", "él",
    "sí",
];

pub(super) const FRENCH: &[&str] = &[
    "a", "ai", "au", "aussi", "aux", "avec", "avez", "avons", "avait", "c", "ce", "ceci",
    "cela", "ces", "cet", "cette", "comme", "d", "dans", "de", "des", "donc", "du",
    "elle", "elles", "en", "encore", "est", "et", "eu", "fait", "il", "ils", "j", "je",
    "l", "la", "le", "les", "leur", "leurs", "lui", "m", "mais", "me", "mes", "moi",
    "mon", "même", "n", "ne", "nos", "notre", "nous", "on", "ont", "ou", "où", "par",
    "pas", "peu", "plus", "pour", "qu", "que", "qui", "s", "sa", "sans", "se", "ses",
    "si", "son", "sont", "sur", "t", "ta", "te", "tes", "toi", "ton", "tous", "tout",
    "toute", "toutes", "très", "tu", "un", "une", "vos", "votre", "vous", "y", "à", "été",
    "être", "était",
];

pub(super) const ENGLISH_MARKERS: &[&str] = &[
    "the", "and", "is", "are", "of", "to", "in", "that", "it", "with", "for", "this",
    "was", "have", "you", "be",
];

pub(super) const SPANISH_MARKERS: &[&str] = &[
    "el", "los", "las", "del", "y", "es", "por", "para", "con", "una", "está", "pero",
    "como", "muy", "al",
];

pub(super) const FRENCH_MARKERS: &[&str] = &[
    "le", "les", "des", "du", "et", "est", "une", "pour", "avec", "dans", "qui", "pas",
    "sur", "ce", "sont", "au",
];

//! Static sentence tables the catalog is built from.

pub type Pair = (&'static str, &'static str);

pub const CURATED: &[(&str, &[Pair])] = &[
    (
        "Daily Life",
        &[
            ("Je me lève à 7 heures.", "I get up at 7 o'clock."),
            ("Je prépare le petit-déjeuner.", "I prepare breakfast."),
            ("Je fais le ménage chaque semaine.", "I clean the house every week."),
            ("Je prends une douche le matin.", "I take a shower in the morning."),
            ("Je pars au travail à pied.", "I walk to work."),
        ],
    ),
    (
        "Travel",
        &[
            ("Où est la gare la plus proche ?", "Where is the nearest train station?"),
            ("Je voudrais acheter un billet pour Paris.", "I would like to buy a ticket to Paris."),
            ("À quelle heure part le prochain train ?", "What time does the next train leave?"),
            ("Combien coûte un billet aller-retour ?", "How much is a round-trip ticket?"),
            ("Je cherche un hôtel pas trop cher.", "I'm looking for a not-too-expensive hotel."),
        ],
    ),
    (
        "Food & Drinks",
        &[
            ("Je voudrais un café, s'il vous plaît.", "I would like a coffee, please."),
            ("La carte, s'il vous plaît.", "The menu, please."),
            ("L'addition, s'il vous plaît.", "The bill, please."),
            ("Je suis végétarien(ne).", "I am vegetarian."),
            ("Ce plat est très bon.", "This dish is very good."),
        ],
    ),
    (
        "Shopping",
        &[
            ("Où puis-je trouver cette robe ?", "Where can I find this dress?"),
            ("Avez-vous cette taille en stock ?", "Do you have this size in stock?"),
            ("Je vais payer par carte.", "I will pay by card."),
            ("Pouvez-vous me montrer autre chose ?", "Can you show me something else?"),
            ("C'est trop cher pour moi.", "That's too expensive for me."),
        ],
    ),
    (
        "Family & Friends",
        &[
            ("Comment va ta famille ?", "How is your family?"),
            ("J'ai deux frères et une sœur.", "I have two brothers and one sister."),
            ("Nous allons rendre visite à mes parents.", "We are going to visit my parents."),
            ("Il est mon meilleur ami.", "He is my best friend."),
            ("Nous dînons ensemble ce soir.", "We are having dinner together tonight."),
        ],
    ),
    (
        "Work & School",
        &[
            ("Je travaille dans une entreprise informatique.", "I work at an IT company."),
            ("J'ai un examen demain.", "I have an exam tomorrow."),
            ("Pouvez-vous me donner ce document ?", "Can you give me that document?"),
            ("La réunion commence à 10 heures.", "The meeting starts at 10 o'clock."),
            ("Je dois soumettre le rapport aujourd'hui.", "I must submit the report today."),
        ],
    ),
    (
        "Sports & Fitness",
        &[
            ("J'aime jouer au football.", "I like to play football."),
            ("Je fais du jogging trois fois par semaine.", "I go jogging three times a week."),
            ("Combien de kilomètres as-tu couru ?", "How many kilometers did you run?"),
            ("Je vais à la salle de sport le matin.", "I go to the gym in the morning."),
            ("Elle pratique la natation depuis longtemps.", "She has been swimming for a long time."),
        ],
    ),
    (
        "Expressions & Emotions",
        &[
            ("Je suis très heureux aujourd'hui.", "I am very happy today."),
            ("Je suis un peu triste.", "I am a little sad."),
            ("Félicitations pour ton succès !", "Congratulations on your success!"),
            ("Ne t'inquiète pas.", "Don't worry."),
            ("Je suis surpris par la nouvelle.", "I am surprised by the news."),
        ],
    ),
    (
        "Health",
        &[
            ("J'ai mal à la tête.", "I have a headache."),
            (
                "Je voudrais prendre rendez-vous chez le médecin.",
                "I would like to make an appointment with the doctor.",
            ),
            ("Avez-vous des médicaments contre la toux ?", "Do you have cough medicine?"),
            ("Je suis allergique aux noix.", "I am allergic to nuts."),
            ("Il faut se reposer quand on est malade.", "You must rest when you're sick."),
        ],
    ),
    (
        "Time & Date",
        &[
            ("Quelle est la date aujourd'hui ?", "What is the date today?"),
            ("Nous sommes le 14 juillet.", "Today is July 14th."),
            ("À quelle heure est le film ?", "At what time is the movie?"),
            ("Je reviens demain matin.", "I'll come back tomorrow morning."),
            ("Le rendez-vous est prévu pour vendredi.", "The appointment is scheduled for Friday."),
        ],
    ),
    (
        "Directions",
        &[
            ("Tournez à gauche au prochain carrefour.", "Turn left at the next intersection."),
            ("C'est à cinq minutes à pied.", "It's five minutes on foot."),
            ("Continuez tout droit.", "Keep going straight."),
            ("Prenez la première rue à droite.", "Take the first street on the right."),
            ("Où est la pharmacie la plus proche ?", "Where is the nearest pharmacy?"),
        ],
    ),
    (
        "Weather",
        &[
            ("Il fait beau aujourd'hui.", "The weather is nice today."),
            ("Il va pleuvoir cet après-midi.", "It will rain this afternoon."),
            ("Il fait très chaud en été.", "It is very hot in summer."),
            ("La météo annonce du vent.", "The forecast predicts wind."),
            ("Il neige souvent ici en hiver.", "It often snows here in winter."),
        ],
    ),
    (
        "Questions",
        &[
            ("Comment t'appelles-tu ?", "What is your name?"),
            ("D'où viens-tu ?", "Where are you from?"),
            ("Pouvez-vous répéter, s'il vous plaît ?", "Can you repeat, please?"),
            ("Quel est votre numéro de téléphone ?", "What is your phone number?"),
            ("Parlez-vous français ?", "Do you speak French?"),
        ],
    ),
    (
        "Numbers & Counting",
        &[
            ("J'ai trois enfants.", "I have three children."),
            ("Il y a vingt personnes dans la salle.", "There are twenty people in the room."),
            ("Combien coûte ceci ?", "How much does this cost?"),
            ("Je reviens dans cinq minutes.", "I'll be back in five minutes."),
            ("Mon numéro est le 07 12 34 56 78.", "My number is 07 12 34 56 78."),
        ],
    ),
    (
        "Technology",
        &[
            ("Mon ordinateur est lent aujourd'hui.", "My computer is slow today."),
            ("Peux-tu m'envoyer le fichier par e-mail ?", "Can you send me the file by email?"),
            ("J'ai besoin d'un mot de passe.", "I need a password."),
            ("La connexion internet est instable.", "The internet connection is unstable."),
            ("As-tu installé la mise à jour ?", "Did you install the update?"),
        ],
    ),
];

pub const DAILY_SUBJECTS: &[&str] = &["Je", "Tu", "Il", "Elle", "Nous", "Vous", "Ils"];
pub const DAILY_ACTIONS: &[&str] = &[
    "prépare", "visite", "nettoie", "cherche", "regarde", "écoute", "apprends",
];
pub const DAILY_OBJECTS: &[&str] = &[
    "le petit-déjeuner",
    "la maison",
    "le journal",
    "la télévision",
    "la musique",
    "une nouvelle recette",
];

/// An action × object expansion with fixed French and English frames.
pub struct Expansion {
    pub category: &'static str,
    pub actions: &'static [&'static str],
    pub objects: &'static [&'static str],
    pub fr: (&'static str, &'static str),
    pub en: (&'static str, &'static str),
}

impl Expansion {
    /// Renders `prefix action object suffix` for both languages.
    pub fn render(&self, action: &str, object: &str) -> (String, String) {
        (
            format!("{} {} {}{}", self.fr.0, action, object, self.fr.1),
            format!("{} {} {}{}", self.en.0, action, object, self.en.1),
        )
    }
}

pub const EXPANSIONS: &[Expansion] = &[
    Expansion {
        category: "Travel",
        actions: &["prendre", "arriver", "partir", "réserver", "chercher"],
        objects: &["un taxi", "un billet", "l'hôtel", "la gare", "le vol"],
        fr: ("Nous allons", "."),
        en: ("We are going to", "."),
    },
    Expansion {
        category: "Food & Drinks",
        actions: &["manger", "boire", "commander", "goûter"],
        objects: &["une soupe", "un sandwich", "un dessert", "du fromage", "du vin"],
        fr: ("J'aime", "."),
        en: ("I like to", "."),
    },
    Expansion {
        category: "Shopping",
        actions: &["acheter", "essayer", "payer", "vendre"],
        objects: &["une robe", "des chaussures", "un cadeau", "ce pantalon"],
        fr: ("Je vais", "."),
        en: ("I'm going to", "."),
    },
    Expansion {
        category: "Family & Friends",
        actions: &["parler", "voir", "inviter", "aider"],
        objects: &["ma mère", "mon frère", "mes amis", "ma sœur"],
        fr: ("Je vais", " ce soir."),
        en: ("I'm going to", " tonight."),
    },
    Expansion {
        category: "Work & School",
        actions: &["étudier", "travailler", "présenter", "terminer"],
        objects: &["le devoir", "le projet", "la présentation", "le rapport"],
        fr: ("Nous devons", " demain."),
        en: ("We must", " tomorrow."),
    },
    Expansion {
        category: "Sports & Fitness",
        actions: &["courir", "nager", "jouer", "s'entraîner"],
        objects: &["au parc", "à la piscine", "au stade", "le weekend"],
        fr: ("Je vais", " ce weekend."),
        en: ("I'm going to", " this weekend."),
    },
];

pub const PHRASES: &[(&str, &[&str])] = &[
    (
        "Expressions & Emotions",
        &["Je suis heureux", "Je suis triste", "Je suis fatigué", "Je suis en colère"],
    ),
    (
        "Health",
        &["J'ai mal au dos", "Je suis malade", "Je dois voir un médecin", "J'ai besoin de repos"],
    ),
    (
        "Time & Date",
        &["Aujourd'hui", "Demain matin", "Ce soir", "La semaine prochaine"],
    ),
    (
        "Directions",
        &["à gauche", "à droite", "tout droit", "au coin de la rue"],
    ),
    (
        "Weather",
        &["Il fait chaud", "Il fait froid", "Il pleut", "Il neige"],
    ),
    ("Questions", &["Pourquoi ?", "Comment ?", "Quel ?", "Quand ?", "Où ?"]),
    ("Numbers & Counting", &["un", "deux", "trois", "dix", "vingt"]),
    (
        "Technology",
        &["l'ordinateur", "le téléphone", "le logiciel", "la mise à jour", "la connexion"],
    ),
];

pub const FILLER: [(&str, &str, &str); 5] = [
    ("Je lis un livre ce soir.", "I am reading a book tonight.", "Daily Life"),
    ("Où est la boulangerie la plus proche ?", "Where is the nearest bakery?", "Travel"),
    ("La soupe est chaude.", "The soup is hot.", "Food & Drinks"),
    ("Combien de temps cela prend ?", "How long does it take?", "Questions"),
    ("Il y a du monde aujourd'hui.", "There are a lot of people today.", "Daily Life"),
];

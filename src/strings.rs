use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    English,
    Italian,
}

impl Language {
    pub fn next(self) -> Self {
        match self {
            Language::English => Language::Italian,
            Language::Italian => Language::English,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Italian => "Italiano",
        }
    }
}

/// The scene text database. Keys are stable across languages; an unknown
/// key comes back as itself so a typo shows up on screen instead of hiding.
pub fn text(lang: Language, key: &'static str) -> &'static str {
    let line = match lang {
        Language::English => match key {
            "MENU001" => "a dodging trip through the scrapyard of space",
            "MENU002" => "Play",
            "MENU003" => "Tutorial",
            "MENU004" => "Options",
            "MENU005" => "Credits",
            "MENU006" => "Quit",
            "TUTORIAL001" => "This is you. Move with WASD or the arrows.",
            "TUTORIAL002" => "This is an asteroid. Do not touch it.",
            "TUTORIAL003" => "Scrap metal. Collect it, it pays the bills.",
            "TUTORIAL004" => "Your hull. It repairs itself, slowly.",
            "TUTORIAL005" => "back to menu",
            "TUTORIAL006" => "start the mission",
            "LOSE001" => "The ship is lost",
            "LOSE002" => "back to menu",
            "LOSE003" => "try again",
            "OPTIONS001" => "Sounds",
            "OPTIONS002" => "Music",
            "OPTIONS003" => "Volumes",
            "OPTIONS004" => "Language",
            "CREDITS001" => "coding",
            "CREDITS002" => "graphics",
            "CREDITS003" => "terminal glyphs",
            "CREDITS004" => "sounds",
            "CREDITS005" => "thank you for playing!",
            "LEVEL_SCORE" => "Score",
            "LEVEL001" => "Ok Pilot, I'm Navigator and I'll help you in today's mission. Look how cool it sounds when you call it 'mission'.",
            "LEVEL002" => "Our job is to collect metal scraps from space and sell them. It ain't much, but it's honest work.",
            "LEVEL003" => "We detected unusual asteroid activity near Quasari Station. Impacts mean scrap, and scrap means money.",
            "LEVEL004" => "Avoid the asteroids. Repairs are automated but they cost precious metal. Also, we could die. So try your best.",
            "LEVEL005" => "Here they come. Good luck, Pilot.",
            "LEVEL006" => "A calm stretch. Keep collecting while it lasts.",
            "LEVEL007" => "Swarm incoming! Hold on!",
            "LEVEL008" => "That's Quasari Station ahead. Taking over the controls, our job here is done.",
            _ => key,
        },
        Language::Italian => match key {
            "MENU001" => "una gita tra i rottami dello spazio",
            "MENU002" => "Gioca",
            "MENU003" => "Tutorial",
            "MENU004" => "Opzioni",
            "MENU005" => "Crediti",
            "MENU006" => "Esci",
            "TUTORIAL001" => "Questo sei tu. Muoviti con WASD o le frecce.",
            "TUTORIAL002" => "Questo e' un asteroide. Non toccarlo.",
            "TUTORIAL003" => "Rottami metallici. Raccoglili, pagano le bollette.",
            "TUTORIAL004" => "Il tuo scafo. Si ripara da solo, lentamente.",
            "TUTORIAL005" => "torna al menu",
            "TUTORIAL006" => "inizia la missione",
            "LOSE001" => "La nave e' perduta",
            "LOSE002" => "torna al menu",
            "LOSE003" => "riprova",
            "OPTIONS001" => "Suoni",
            "OPTIONS002" => "Musica",
            "OPTIONS003" => "Volumi",
            "OPTIONS004" => "Lingua",
            "CREDITS001" => "programmazione",
            "CREDITS002" => "grafica",
            "CREDITS003" => "glifi da terminale",
            "CREDITS004" => "suoni",
            "CREDITS005" => "grazie per aver giocato!",
            "LEVEL_SCORE" => "Punti",
            "LEVEL001" => "Ok Pilota, sono Navigator e ti aiutero' nella missione di oggi. Senti come suona bene chiamarla 'missione'.",
            "LEVEL002" => "Il nostro lavoro e' raccogliere rottami nello spazio e venderli. Non e' molto, ma e' un lavoro onesto.",
            "LEVEL003" => "Attivita' anomala di asteroidi vicino alla Stazione Quasari. Gli impatti lasciano rottami, e i rottami sono soldi.",
            "LEVEL004" => "Evita gli asteroidi. Le riparazioni sono automatiche ma costano metallo prezioso. Potremmo anche morire. Impegnati.",
            "LEVEL005" => "Eccoli che arrivano. Buona fortuna, Pilota.",
            "LEVEL006" => "Un tratto tranquillo. Continua a raccogliere finche' dura.",
            "LEVEL007" => "Sciame in arrivo! Tieni duro!",
            "LEVEL008" => "Quella e' la Stazione Quasari. Prendo io i comandi, qui abbiamo finito.",
            _ => key,
        },
    };
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_covers_the_same_keys() {
        for key in [
            "MENU001", "TUTORIAL003", "LOSE001", "OPTIONS004", "CREDITS005", "LEVEL004",
        ] {
            assert_ne!(text(Language::English, key), key);
            assert_ne!(text(Language::Italian, key), key);
        }
    }

    #[test]
    fn unknown_keys_echo_back() {
        assert_eq!(text(Language::English, "NOPE999"), "NOPE999");
    }

    #[test]
    fn cycle_visits_every_language() {
        let start = Language::English;
        assert_eq!(start.next(), Language::Italian);
        assert_eq!(start.next().next(), start);
    }
}

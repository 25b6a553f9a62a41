use super::character::Character;

pub const SEED_OWNER: &str = "fusion44";

fn character(
    id: &str,
    name: &str,
    debut_game: &str,
    release_year: i32,
    img: &str,
    desc: &str,
    wiki: &str,
) -> Character {
    Character {
        id: id.to_owned(),
        name: name.to_owned(),
        debut_game: debut_game.to_owned(),
        release_year,
        img: img.to_owned(),
        desc: desc.to_owned(),
        wiki: wiki.to_owned(),
        public: true,
        owner: SEED_OWNER.to_owned(),
    }
}

/// The characters every directory starts out with.
pub fn characters() -> Vec<Character> {
    vec![
        character(
            "1000",
            "Gordon Freeman",
            "Half-Life",
            1998,
            "gordon_freeman.jpg",
            "Dr. Gordon Freeman is a fictional character and the main protagonist of the Half-Life video game series, created by Gabe Newell[2] and designed by Newell and Marc Laidlaw[3] of Valve Corporation. His first appearance is in Half-Life. Gordon Freeman is an American man from Seattle, who graduated from MIT with a PhD in Theoretical Physics. He was an employee at Black Mesa Research Facility. Controlled by the player, Gordon is often tasked with using a wide range of weapons and tools to fight alien creatures such as headcrabs, as well as Combine machines and soldiers.",
            "https://en.wikipedia.org/wiki/Gordon_Freeman",
        ),
        character(
            "1001",
            "GLaDOS",
            "Portal",
            2007,
            "glados.png",
            "GLaDOS (Genetic Lifeform and Disk Operating System)[1] is a fictional artificially intelligent computer system from the video game series Portal.",
            "https://en.wikipedia.org/wiki/GLaDOS",
        ),
        character(
            "1002",
            "Shodan",
            "System Shock",
            1994,
            "shodan.jpg",
            "SHODAN (Sentient Hyper-Optimized Data Access Network) is a fictional artificial intelligence and the main antagonist of the cyberpunk-horror themed action role-playing video games System Shock and System Shock 2.",
            "https://en.wikipedia.org/wiki/SHODAN",
        ),
        character(
            "1003",
            "The Nameless One",
            "Planescape: Torment",
            1999,
            "nameless_one.jpg",
            "\"The Nameless One\" is a fictional character from the Black Isle Studios role-playing video game Planescape: Torment, and is the main protagonist of the story. The character was voiced by Michael T. Weiss and created by game designer Chris Avellone. The Nameless One is a heavily scarred immortal, who, when killed, may suffer severe memory loss.",
            "https://en.wikipedia.org/wiki/The_Nameless_One",
        ),
        character(
            "1004",
            "Lara Croft",
            "Tomb Raider",
            1996,
            "lara.jpg",
            "Lara Croft is a fictional character and the main protagonist of the Square Enix (previously Eidos Interactive) video game franchise Tomb Raider. She is presented as a highly intelligent, athletic, and beautiful English archaeologist-adventurer who ventures into ancient, hazardous tombs and ruins around the world. Created by a team at UK developer Core Design that included Toby Gard, the character first appeared in the 1996 video game Tomb Raider. She has also appeared in video game sequels, printed adaptations, a series of animated short films, feature films (portrayed by Angelina Jolie, later by Alicia Vikander), and merchandise related to the series. Official promotion of the character includes a brand of apparel and accessories, action figures, and model portrayals. Croft has also been licensed for third-party promotion, including television and print advertisements, music-related appearances, and as a spokesmodel. As of June 2016, Lara Croft has been featured on over 1,100 magazine covers surpassing any supermodel.",
            "https://en.wikipedia.org/wiki/Lara_Croft",
        ),
        character(
            "1005",
            "Cate Archer",
            "No One Lives Forever",
            2000,
            "cate_archer.jpg",
            "Catherine Ann \"Cate\" Archer, codenamed The Fox, is a player character and the protagonist in the No One Lives Forever video game series by Monolith Productions. Cate, a covert operative for British-based counter-terrorism organization UNITY, is the main character in The Operative: No One Lives Forever (2000) and No One Lives Forever 2: A Spy In H.A.R.M.'s Way (2002), and is also featured in Contract J.A.C.K., an official prequel to the second game.",
            "https://en.wikipedia.org/wiki/Cate_Archer",
        ),
    ]
}

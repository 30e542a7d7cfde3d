//! The fixed labyrinth map

use super::{Room, World};
use crate::consts::{
    BRONZE_BOX, START_ROOM, SWORD, TORCH, TRAP_ROOM, TREASURE_CHEST, TREASURE_ROOM,
};

impl World {
    /// Build the labyrinth in its starting state
    pub fn labyrinth() -> Self {
        let mut world = World::new();

        world.add_room(
            Room::new(
                START_ROOM,
                "Вы в темном входе лабиринта. Стены покрыты мхом. \
                 На полу лежит старый факел.",
            )
            .with_exit("north", "hall")
            .with_exit("east", TRAP_ROOM)
            .with_item(TORCH),
        );

        world.add_room(
            Room::new(
                "hall",
                "Большой зал с эхом. По центру стоит пьедестал, \
                 за ним виднеется тяжелая дверь на север.",
            )
            .with_exit("south", START_ROOM)
            .with_exit("west", "library")
            .with_exit("north", TREASURE_ROOM)
            .with_puzzle(
                "На пьедестале надпись: \"Назовите число, которое идет после девяти\". \
                 Введите ответ цифрой или словом.",
                "10",
            ),
        );

        world.add_room(
            Room::new(
                "library",
                "Пыльная библиотека. На полках старые свитки, \
                 где-то тихо звенит забытый камертон.",
            )
            .with_exit("east", "hall")
            .with_exit("north", "armory")
            .with_item("ancient book")
            .with_puzzle(
                "В одном свитке загадка: \"Камертон молчит, пока не найдет свою ноту. \
                 Как зовется то, что заставляет бокал петь от чужого голоса?\" \
                 (ответ одно слово)",
                "резонанс",
            ),
        );

        world.add_room(
            Room::new(
                "armory",
                "Старая оружейная комната. На стене висит меч, \
                 рядом стоит небольшая бронзовая шкатулка.",
            )
            .with_exit("south", "library")
            .with_item(SWORD)
            .with_item(BRONZE_BOX),
        );

        world.add_room(
            Room::new(
                TRAP_ROOM,
                "Комната с хитрыми плитами на полу. \
                 На стене видна надпись: \"Осторожно - ловушка\".",
            )
            .with_exit("west", START_ROOM)
            .with_puzzle(
                "Система плит активна. Чтобы пройти, назовите слово \"шаг\" \
                 три раза подряд (введите \"шаг шаг шаг\").",
                "шаг шаг шаг",
            ),
        );

        world.add_room(
            Room::new(
                TREASURE_ROOM,
                "Комната сокровищ. На столе стоит большой сундук с кодовым замком.",
            )
            .with_exit("south", "hall")
            .with_item(TREASURE_CHEST)
            .with_puzzle(
                "Сундук защищен кодом. Введите код \
                 (подсказка: это число пятикратного шага, 2*5 = ?).",
                "10",
            ),
        );

        world
    }
}

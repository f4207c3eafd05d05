use cafe_common::models::cafe::Cafe;

/// The dataset served when no `--dataset` file is given.
pub fn builtin() -> Vec<(&'static str, Vec<Cafe>)> {
    vec![
        (
            "moscow",
            vec![
                Cafe::new("Мир кофе", "Тверская ул. 3"),
                Cafe::new("Сладкоежка", "Арбат 12"),
                Cafe::new("Кофе и завтраки", "Покровка 27"),
                Cafe::new("Сытый студент", "Ленинский пр. 68"),
                Cafe::new("Ложка и вилка", "Пятницкая ул. 9"),
            ],
        ),
        (
            "tula",
            vec![
                Cafe::new("Тульский пряник", "Менделеевская ул. 1"),
                Cafe::new("Самовар", "Советская ул. 47"),
                Cafe::new("Кремлёвская кухня", "Металлистов ул. 5"),
            ],
        ),
    ]
}

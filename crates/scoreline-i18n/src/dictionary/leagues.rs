use super::Entry;

// zh-hk, zh-tw, zh-cn, ja, ko, es, pt, de, fr, it
pub(crate) static ENTRIES: &[Entry] = &[
    Entry::scoped("Premier League", "England", ["英格蘭超級聯賽", "英格蘭超級聯賽", "英格兰超级联赛", "プレミアリーグ", "프리미어리그", "", "", "", "", ""]),
    Entry::scoped("Championship", "England", ["英格蘭冠軍聯賽", "英格蘭冠軍聯賽", "英格兰冠军联赛", "EFLチャンピオンシップ", "EFL 챔피언십", "", "", "", "", ""]),
    Entry::scoped("FA Cup", "England", ["英格蘭足總盃", "英格蘭足總盃", "英格兰足总杯", "FAカップ", "FA컵", "Copa FA", "Taça FA", "", "Coupe d'Angleterre", "Coppa d'Inghilterra"]),
    Entry::scoped("Premiership", "Scotland", ["蘇格蘭超級聯賽", "蘇格蘭超級聯賽", "苏格兰超级联赛", "スコティッシュ・プレミアシップ", "스코티시 프리미어십", "", "", "", "", ""]),
    Entry::scoped("La Liga", "Spain", ["西班牙甲組聯賽", "西班牙甲級聯賽", "西班牙甲级联赛", "ラ・リーガ", "라리가", "", "", "", "", ""]),
    Entry::scoped("Serie A", "Italy", ["意大利甲組聯賽", "義大利甲級聯賽", "意大利甲级联赛", "セリエA", "세리에 A", "", "", "", "", ""]),
    Entry::scoped("Serie A", "Brazil", ["巴西甲組聯賽", "巴西甲級聯賽", "巴西甲级联赛", "ブラジル・セリエA", "브라질 세리에 A", "", "Brasileirão Série A", "", "", ""]),
    Entry::scoped("Bundesliga", "Germany", ["德國甲組聯賽", "德國甲級聯賽", "德国甲级联赛", "ブンデスリーガ", "분데스리가", "", "", "", "", ""]),
    Entry::scoped("Ligue 1", "France", ["法國甲組聯賽", "法國甲級聯賽", "法国甲级联赛", "リーグ・アン", "리그 1", "", "", "", "", ""]),
    Entry::scoped("Eredivisie", "Netherlands", ["荷蘭甲組聯賽", "荷蘭甲級聯賽", "荷兰甲级联赛", "エールディヴィジ", "에레디비시", "", "", "", "", ""]),
    Entry::scoped("Primeira Liga", "Portugal", ["葡萄牙超級聯賽", "葡萄牙超級聯賽", "葡萄牙超级联赛", "プリメイラ・リーガ", "프리메이라리가", "", "", "", "", ""]),
    Entry::scoped("Süper Lig", "Turkey", ["土耳其超級聯賽", "土耳其超級聯賽", "土耳其超级联赛", "スュペル・リグ", "쉬페르리그", "Superliga de Turquía", "Superliga Turca", "", "", ""]),
    Entry::scoped("Major League Soccer", "USA", ["美國職業足球大聯盟", "美國職業足球大聯盟", "美国职业足球大联盟", "メジャーリーグサッカー", "메이저리그 사커", "", "", "", "", ""]),
    Entry::scoped("J1 League", "Japan", ["日本J1聯賽", "日本J1聯賽", "日本J1联赛", "J1リーグ", "J1리그", "", "", "", "", ""]),
    Entry::scoped("K League 1", "South Korea", ["韓國K1聯賽", "韓國K1聯賽", "韩国K1联赛", "Kリーグ1", "K리그1", "", "", "", "", ""]),
    Entry::scoped("Super League", "China", ["中國超級聯賽", "中國超級聯賽", "中国超级联赛", "中国スーパーリーグ", "중국 슈퍼리그", "Superliga China", "Superliga Chinesa", "", "", ""]),
    Entry::scoped("A-League", "Australia", ["澳洲職業聯賽", "澳洲職業足球聯賽", "澳大利亚职业联赛", "Aリーグ", "A리그", "", "", "", "", ""]),
    Entry::new("UEFA Champions League", ["歐洲聯賽冠軍盃", "歐洲冠軍聯賽", "欧洲冠军联赛", "UEFAチャンピオンズリーグ", "UEFA 챔피언스리그", "Liga de Campeones de la UEFA", "Liga dos Campeões da UEFA", "", "Ligue des champions de l'UEFA", ""]),
    Entry::new("UEFA Europa League", ["歐霸盃", "歐洲聯賽", "欧洲联赛", "UEFAヨーロッパリーグ", "UEFA 유로파리그", "Liga Europa de la UEFA", "Liga Europa da UEFA", "", "Ligue Europa de l'UEFA", ""]),
    Entry::new("Copa Libertadores", ["南美自由盃", "南美解放者盃", "南美解放者杯", "コパ・リベルタドーレス", "코파 리베르타도레스", "", "Taça Libertadores", "", "", ""]),
    Entry::new("World Cup", ["世界盃", "世界盃", "世界杯", "FIFAワールドカップ", "FIFA 월드컵", "Copa del Mundo", "Copa do Mundo", "Weltmeisterschaft", "Coupe du monde", "Coppa del Mondo"]),
];

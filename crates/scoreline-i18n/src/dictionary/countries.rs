use super::Entry;

// zh-hk, zh-tw, zh-cn, ja, ko, es, pt, de, fr, it
pub(crate) static ENTRIES: &[Entry] = &[
    Entry::new("England", ["英格蘭", "英格蘭", "英格兰", "イングランド", "잉글랜드", "Inglaterra", "Inglaterra", "", "Angleterre", "Inghilterra"]),
    Entry::new("Scotland", ["蘇格蘭", "蘇格蘭", "苏格兰", "スコットランド", "스코틀랜드", "Escocia", "Escócia", "Schottland", "Écosse", "Scozia"]),
    Entry::new("Wales", ["威爾斯", "威爾斯", "威尔士", "ウェールズ", "웨일스", "Gales", "País de Gales", "", "Pays de Galles", "Galles"]),
    Entry::new("Ireland", ["愛爾蘭", "愛爾蘭", "爱尔兰", "アイルランド", "아일랜드", "Irlanda", "Irlanda", "Irland", "Irlande", "Irlanda"]),
    Entry::new("Spain", ["西班牙", "西班牙", "西班牙", "スペイン", "스페인", "España", "Espanha", "Spanien", "Espagne", "Spagna"]),
    Entry::new("Germany", ["德國", "德國", "德国", "ドイツ", "독일", "Alemania", "Alemanha", "Deutschland", "Allemagne", "Germania"]),
    Entry::new("Italy", ["意大利", "義大利", "意大利", "イタリア", "이탈리아", "Italia", "Itália", "Italien", "Italie", "Italia"]),
    Entry::new("France", ["法國", "法國", "法国", "フランス", "프랑스", "Francia", "França", "Frankreich", "", "Francia"]),
    Entry::new("Portugal", ["葡萄牙", "葡萄牙", "葡萄牙", "ポルトガル", "포르투갈", "", "", "", "", "Portogallo"]),
    Entry::new("Netherlands", ["荷蘭", "荷蘭", "荷兰", "オランダ", "네덜란드", "Países Bajos", "Holanda", "Niederlande", "Pays-Bas", "Paesi Bassi"]),
    Entry::new("Belgium", ["比利時", "比利時", "比利时", "ベルギー", "벨기에", "Bélgica", "Bélgica", "Belgien", "Belgique", "Belgio"]),
    Entry::new("Switzerland", ["瑞士", "瑞士", "瑞士", "スイス", "스위스", "Suiza", "Suíça", "Schweiz", "Suisse", "Svizzera"]),
    Entry::new("Austria", ["奧地利", "奧地利", "奥地利", "オーストリア", "오스트리아", "", "Áustria", "Österreich", "Autriche", ""]),
    Entry::new("Denmark", ["丹麥", "丹麥", "丹麦", "デンマーク", "덴마크", "Dinamarca", "Dinamarca", "Dänemark", "Danemark", "Danimarca"]),
    Entry::new("Sweden", ["瑞典", "瑞典", "瑞典", "スウェーデン", "스웨덴", "Suecia", "Suécia", "Schweden", "Suède", "Svezia"]),
    Entry::new("Norway", ["挪威", "挪威", "挪威", "ノルウェー", "노르웨이", "Noruega", "Noruega", "Norwegen", "Norvège", "Norvegia"]),
    Entry::new("Croatia", ["克羅地亞", "克羅埃西亞", "克罗地亚", "クロアチア", "크로아티아", "Croacia", "Croácia", "Kroatien", "Croatie", "Croazia"]),
    Entry::new("Poland", ["波蘭", "波蘭", "波兰", "ポーランド", "폴란드", "Polonia", "Polônia", "Polen", "Pologne", "Polonia"]),
    Entry::new("Czech Republic", ["捷克", "捷克", "捷克", "チェコ", "체코", "República Checa", "República Tcheca", "Tschechien", "République tchèque", "Repubblica Ceca"]),
    Entry::new("Greece", ["希臘", "希臘", "希腊", "ギリシャ", "그리스", "Grecia", "Grécia", "Griechenland", "Grèce", "Grecia"]),
    Entry::new("Turkey", ["土耳其", "土耳其", "土耳其", "トルコ", "튀르키예", "Turquía", "Turquia", "Türkei", "Turquie", "Turchia"]),
    Entry::new("Russia", ["俄羅斯", "俄羅斯", "俄罗斯", "ロシア", "러시아", "Rusia", "Rússia", "Russland", "Russie", ""]),
    Entry::new("Ukraine", ["烏克蘭", "烏克蘭", "乌克兰", "ウクライナ", "우크라이나", "Ucrania", "Ucrânia", "", "", "Ucraina"]),
    Entry::new("Brazil", ["巴西", "巴西", "巴西", "ブラジル", "브라질", "Brasil", "Brasil", "Brasilien", "Brésil", "Brasile"]),
    Entry::new("Argentina", ["阿根廷", "阿根廷", "阿根廷", "アルゼンチン", "아르헨티나", "", "", "Argentinien", "Argentine", ""]),
    Entry::new("Uruguay", ["烏拉圭", "烏拉圭", "乌拉圭", "ウルグアイ", "우루과이", "", "", "", "", ""]),
    Entry::new("Chile", ["智利", "智利", "智利", "チリ", "칠레", "", "", "", "Chili", "Cile"]),
    Entry::new("Colombia", ["哥倫比亞", "哥倫比亞", "哥伦比亚", "コロンビア", "콜롬비아", "", "Colômbia", "Kolumbien", "Colombie", ""]),
    Entry::new("Mexico", ["墨西哥", "墨西哥", "墨西哥", "メキシコ", "멕시코", "México", "México", "Mexiko", "Mexique", "Messico"]),
    Entry::new("USA", ["美國", "美國", "美国", "アメリカ", "미국", "Estados Unidos", "Estados Unidos", "Vereinigte Staaten", "États-Unis", "Stati Uniti"]),
    Entry::new("Japan", ["日本", "日本", "日本", "日本", "일본", "Japón", "Japão", "", "Japon", "Giappone"]),
    Entry::new("South Korea", ["南韓", "南韓", "韩国", "韓国", "대한민국", "Corea del Sur", "Coreia do Sul", "Südkorea", "Corée du Sud", "Corea del Sud"]),
    Entry::new("China", ["中國", "中國", "中国", "中国", "중국", "", "", "", "Chine", "Cina"]),
    Entry::new("Hong Kong", ["香港", "香港", "香港", "香港", "홍콩", "", "", "", "", ""]),
    Entry::new("Australia", ["澳洲", "澳洲", "澳大利亚", "オーストラリア", "호주", "", "Austrália", "Australien", "Australie", ""]),
    Entry::new("Saudi Arabia", ["沙特阿拉伯", "沙烏地阿拉伯", "沙特阿拉伯", "サウジアラビア", "사우디아라비아", "Arabia Saudita", "Arábia Saudita", "Saudi-Arabien", "Arabie saoudite", "Arabia Saudita"]),
    Entry::new("Qatar", ["卡塔爾", "卡達", "卡塔尔", "カタール", "카타르", "Catar", "Catar", "Katar", "", ""]),
    Entry::new("Egypt", ["埃及", "埃及", "埃及", "エジプト", "이집트", "Egipto", "Egito", "Ägypten", "Égypte", "Egitto"]),
    Entry::new("Morocco", ["摩洛哥", "摩洛哥", "摩洛哥", "モロッコ", "모로코", "Marruecos", "Marrocos", "Marokko", "Maroc", "Marocco"]),
    Entry::new("World", ["世界", "世界", "世界", "世界", "세계", "Mundo", "Mundo", "Welt", "Monde", "Mondo"]),
];

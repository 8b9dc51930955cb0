use super::Entry;

// zh-hk, zh-tw, zh-cn, ja, ko, es, pt, de, fr, it
pub(crate) static ENTRIES: &[Entry] = &[
    Entry::new("Manchester United", ["曼聯", "曼聯", "曼联", "マンチェスター・ユナイテッド", "맨체스터 유나이티드", "", "", "", "", ""]),
    Entry::new("Manchester City", ["曼城", "曼城", "曼城", "マンチェスター・シティ", "맨체스터 시티", "", "", "", "", ""]),
    Entry::new("Liverpool", ["利物浦", "利物浦", "利物浦", "リヴァプール", "리버풀", "", "", "", "", ""]),
    Entry::new("Arsenal", ["阿仙奴", "兵工廠", "阿森纳", "アーセナル", "아스널", "", "", "", "", ""]),
    Entry::new("Chelsea", ["車路士", "切爾西", "切尔西", "チェルシー", "첼시", "", "", "", "", ""]),
    Entry::new("Tottenham Hotspur", ["熱刺", "熱刺", "热刺", "トッテナム・ホットスパー", "토트넘 홋스퍼", "", "", "", "", ""]),
    Entry::new("Celtic", ["些路迪", "塞爾提克", "凯尔特人", "セルティック", "셀틱", "", "", "", "", ""]),
    Entry::new("Real Madrid", ["皇家馬德里", "皇家馬德里", "皇家马德里", "レアル・マドリード", "레알 마드리드", "", "", "", "", ""]),
    Entry::new("Barcelona", ["巴塞隆拿", "巴塞隆納", "巴塞罗那", "バルセロナ", "바르셀로나", "", "", "", "", ""]),
    Entry::new("Atletico Madrid", ["馬德里體育會", "馬德里競技", "马德里竞技", "アトレティコ・マドリード", "아틀레티코 마드리드", "Atlético de Madrid", "Atlético de Madrid", "", "Atlético de Madrid", "Atlético Madrid"]),
    Entry::new("Bayern Munich", ["拜仁慕尼黑", "拜仁慕尼黑", "拜仁慕尼黑", "バイエルン・ミュンヘン", "바이에른 뮌헨", "Bayern de Múnich", "Bayern de Munique", "FC Bayern München", "", "Bayern Monaco"]),
    Entry::new("Borussia Dortmund", ["多蒙特", "多特蒙德", "多特蒙德", "ボルシア・ドルトムント", "보루시아 도르트문트", "", "", "", "", ""]),
    Entry::new("Juventus", ["祖雲達斯", "尤文圖斯", "尤文图斯", "ユヴェントス", "유벤투스", "", "", "", "", ""]),
    Entry::new("Inter", ["國際米蘭", "國際米蘭", "国际米兰", "インテル", "인테르", "", "", "", "", ""]),
    Entry::new("AC Milan", ["AC米蘭", "AC米蘭", "AC米兰", "ACミラン", "AC 밀란", "", "", "", "", "Milan"]),
    Entry::new("Paris Saint Germain", ["巴黎聖日耳門", "巴黎聖日耳曼", "巴黎圣日耳曼", "パリ・サンジェルマン", "파리 생제르맹", "", "", "", "Paris Saint-Germain", ""]),
    Entry::new("Ajax", ["阿積士", "阿賈克斯", "阿贾克斯", "アヤックス", "아약스", "", "", "", "", ""]),
    Entry::new("Benfica", ["賓菲加", "本菲卡", "本菲卡", "ベンフィカ", "벤피카", "", "", "", "", ""]),
    Entry::new("Flamengo", ["法林明高", "佛朗明哥", "弗拉门戈", "フラメンゴ", "플라멩구", "", "", "", "", ""]),
    Entry::new("Boca Juniors", ["小保加", "博卡青年", "博卡青年", "ボカ・ジュニアーズ", "보카 주니어스", "", "", "", "", ""]),
    Entry::new("Kitchee", ["傑志", "傑志", "杰志", "キッチー", "키치", "", "", "", "", ""]),
    Entry::new("Urawa Reds", ["浦和紅鑽", "浦和紅鑽", "浦和红钻", "浦和レッズ", "우라와 레즈", "", "", "", "", ""]),
];
